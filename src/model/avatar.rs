use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AvatarPartDto {
    pub id: i32,
    /// One of `body`, `hair`, `eyes`, `top`, `bottom`, `hat`.
    pub slot: String,
    pub name: String,
    pub sprite_key: String,
    /// Compositing order, lowest drawn first.
    pub layer: i16,
    /// 0 means free.
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateAvatarPartDto {
    pub slot: String,
    pub name: String,
    pub sprite_key: String,
    pub layer: i16,
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateAvatarPartDto {
    pub name: String,
    pub sprite_key: String,
    pub layer: i16,
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquipDto {
    /// Slot the client is equipping into; must match the part's own slot.
    pub slot: String,
    pub part_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UnequipDto {
    pub slot: String,
}

/// The student's current paper doll, parts ordered by layer for compositing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AvatarDto {
    pub parts: Vec<AvatarPartDto>,
}
