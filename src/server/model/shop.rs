//! Shop item domain models and operation parameters.

use entity::item::ItemCategory;
use sea_orm::ActiveEnum;

use crate::model::shop::{InventoryEntryDto, ItemDto, PurchaseResultDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category: ItemCategory,
}

impl Item {
    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            category: entity.category,
        }
    }

    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category.to_value(),
        }
    }
}

pub struct CreateItemParam {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category: ItemCategory,
}

pub struct UpdateItemParam {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category: ItemCategory,
}

/// One owned item with its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEntry {
    pub item: Item,
    pub quantity: i32,
}

impl InventoryEntry {
    pub fn into_dto(self) -> InventoryEntryDto {
        InventoryEntryDto {
            item: self.item.into_dto(),
            quantity: self.quantity,
        }
    }
}

/// Outcome of a successful purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseResult {
    pub item_id: i32,
    pub quantity: i32,
    pub gold_remaining: i32,
}

impl PurchaseResult {
    pub fn into_dto(self) -> PurchaseResultDto {
        PurchaseResultDto {
            item_id: self.item_id,
            quantity: self.quantity,
            gold_remaining: self.gold_remaining,
        }
    }
}
