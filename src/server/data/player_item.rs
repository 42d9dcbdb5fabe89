//! Player inventory data repository.
//!
//! Ownership is a quantity per (student, item) pair. The add path is a
//! read-modify-write; the shop service runs it inside the purchase transaction.

use crate::server::model::shop::{InventoryEntry, Item};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct PlayerItemRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds one copy of an item to a student's inventory.
    ///
    /// # Returns
    /// - `Ok(quantity)` - The student's quantity of the item after the add
    pub async fn add_item(&self, student_id: i32, item_id: i32) -> Result<i32, DbErr> {
        let existing = entity::prelude::PlayerItem::find()
            .filter(entity::player_item::Column::StudentId.eq(student_id))
            .filter(entity::player_item::Column::ItemId.eq(item_id))
            .one(self.db)
            .await?;

        match existing {
            None => {
                entity::player_item::ActiveModel {
                    student_id: ActiveValue::Set(student_id),
                    item_id: ActiveValue::Set(item_id),
                    quantity: ActiveValue::Set(1),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;

                Ok(1)
            }
            Some(existing) => {
                let quantity = existing.quantity + 1;

                let mut active_model: entity::player_item::ActiveModel = existing.into();
                active_model.quantity = ActiveValue::Set(quantity);
                active_model.update(self.db).await?;

                Ok(quantity)
            }
        }
    }

    /// Gets a student's inventory with full item data, soft-deleted items included
    /// so owned copies never vanish from the list.
    pub async fn get_inventory(&self, student_id: i32) -> Result<Vec<InventoryEntry>, DbErr> {
        let rows = entity::prelude::PlayerItem::find()
            .filter(entity::player_item::Column::StudentId.eq(student_id))
            .find_also_related(entity::prelude::Item)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(owned, item)| {
                item.map(|item| InventoryEntry {
                    item: Item::from_entity(item),
                    quantity: owned.quantity,
                })
            })
            .collect())
    }
}
