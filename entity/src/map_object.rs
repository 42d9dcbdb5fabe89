use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MapObjectKind {
    #[sea_orm(string_value = "obstacle")]
    Obstacle,
    #[sea_orm(string_value = "portal")]
    Portal,
    #[sea_orm(string_value = "npc")]
    Npc,
    #[sea_orm(string_value = "chest")]
    Chest,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "map_object")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub map_id: i32,
    pub kind: MapObjectKind,
    pub x: i32,
    pub y: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub payload: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game_map::Entity",
        from = "Column::MapId",
        to = "super::game_map::Column::Id"
    )]
    Map,
}

impl ActiveModelBehavior for ActiveModel {}
