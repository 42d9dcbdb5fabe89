use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000015_create_game_map_table::GameMap;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MapObject::Table)
                    .if_not_exists()
                    .col(pk_auto(MapObject::Id))
                    .col(integer(MapObject::MapId))
                    .col(string_len(MapObject::Kind, 16))
                    .col(integer(MapObject::X))
                    .col(integer(MapObject::Y))
                    .col(text_null(MapObject::Payload))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_map_object_map_id")
                            .from(MapObject::Table, MapObject::MapId)
                            .to(GameMap::Table, GameMap::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MapObject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MapObject {
    Table,
    Id,
    MapId,
    Kind,
    X,
    Y,
    Payload,
}
