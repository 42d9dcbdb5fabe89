//! Avatar part domain models and operation parameters.

use entity::avatar_part::AvatarSlot;
use sea_orm::ActiveEnum;

use crate::model::avatar::AvatarPartDto;

#[derive(Debug, Clone, PartialEq)]
pub struct AvatarPart {
    pub id: i32,
    pub slot: AvatarSlot,
    pub name: String,
    pub sprite_key: String,
    pub layer: i16,
    pub price: i32,
}

impl AvatarPart {
    pub fn from_entity(entity: entity::avatar_part::Model) -> Self {
        Self {
            id: entity.id,
            slot: entity.slot,
            name: entity.name,
            sprite_key: entity.sprite_key,
            layer: entity.layer,
            price: entity.price,
        }
    }

    pub fn into_dto(self) -> AvatarPartDto {
        AvatarPartDto {
            id: self.id,
            slot: self.slot.to_value(),
            name: self.name,
            sprite_key: self.sprite_key,
            layer: self.layer,
            price: self.price,
        }
    }
}

pub struct CreateAvatarPartParam {
    pub slot: AvatarSlot,
    pub name: String,
    pub sprite_key: String,
    pub layer: i16,
    pub price: i32,
}

pub struct UpdateAvatarPartParam {
    pub name: String,
    pub sprite_key: String,
    pub layer: i16,
    pub price: i32,
}
