//! Avatar part factory for creating test catalogue parts.

use crate::factory::helpers::next_id;
use entity::avatar_part::AvatarSlot;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test avatar parts with customizable fields.
pub struct AvatarPartFactory<'a> {
    db: &'a DatabaseConnection,
    slot: AvatarSlot,
    name: String,
    sprite_key: String,
    layer: i16,
    price: i32,
}

impl<'a> AvatarPartFactory<'a> {
    /// Creates a new AvatarPartFactory with default values.
    ///
    /// Defaults:
    /// - slot: `Body`
    /// - name: `"Part {id}"` where id is auto-incremented
    /// - sprite_key: `"part_{id}"`
    /// - layer: `0`
    /// - price: `0` (free)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slot: AvatarSlot::Body,
            name: format!("Part {}", id),
            sprite_key: format!("part_{}", id),
            layer: 0,
            price: 0,
        }
    }

    pub fn slot(mut self, slot: AvatarSlot) -> Self {
        self.slot = slot;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn layer(mut self, layer: i16) -> Self {
        self.layer = layer;
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the avatar part entity into the database.
    pub async fn build(self) -> Result<entity::avatar_part::Model, DbErr> {
        entity::avatar_part::ActiveModel {
            id: ActiveValue::NotSet,
            slot: ActiveValue::Set(self.slot),
            name: ActiveValue::Set(self.name),
            sprite_key: ActiveValue::Set(self.sprite_key),
            layer: ActiveValue::Set(self.layer),
            price: ActiveValue::Set(self.price),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a free body part with default values.
pub async fn create_part(db: &DatabaseConnection) -> Result<entity::avatar_part::Model, DbErr> {
    AvatarPartFactory::new(db).build().await
}
