use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User, m20260801_000011_create_item_table::Item,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerItem::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerItem::Id))
                    .col(integer(PlayerItem::StudentId))
                    .col(integer(PlayerItem::ItemId))
                    .col(integer(PlayerItem::Quantity).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_item_student_id")
                            .from(PlayerItem::Table, PlayerItem::StudentId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_item_item_id")
                            .from(PlayerItem::Table, PlayerItem::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_item_unique")
                    .table(PlayerItem::Table)
                    .col(PlayerItem::StudentId)
                    .col(PlayerItem::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerItem {
    Table,
    Id,
    StudentId,
    ItemId,
    Quantity,
}
