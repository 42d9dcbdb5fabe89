use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i32,
    /// Either `consumable` or `cosmetic`.
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateItemDto {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateItemDto {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryEntryDto {
    pub item: ItemDto,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PurchaseResultDto {
    pub item_id: i32,
    pub quantity: i32,
    pub gold_remaining: i32,
}
