use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_class_table::Class;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameMap::Table)
                    .if_not_exists()
                    .col(pk_auto(GameMap::Id))
                    .col(integer(GameMap::ClassId))
                    .col(string(GameMap::Name))
                    .col(integer(GameMap::Width))
                    .col(integer(GameMap::Height))
                    .col(string(GameMap::TilesetKey))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_map_class_id")
                            .from(GameMap::Table, GameMap::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameMap::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameMap {
    Table,
    Id,
    ClassId,
    Name,
    Width,
    Height,
    TilesetKey,
}
