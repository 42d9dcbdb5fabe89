use sea_orm::entity::prelude::*;

/// Paper-doll slot a part occupies. One part may be equipped per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AvatarSlot {
    #[sea_orm(string_value = "body")]
    Body,
    #[sea_orm(string_value = "hair")]
    Hair,
    #[sea_orm(string_value = "eyes")]
    Eyes,
    #[sea_orm(string_value = "top")]
    Top,
    #[sea_orm(string_value = "bottom")]
    Bottom,
    #[sea_orm(string_value = "hat")]
    Hat,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "avatar_part")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub slot: AvatarSlot,
    pub name: String,
    pub sprite_key: String,
    pub layer: i16,
    pub price: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
