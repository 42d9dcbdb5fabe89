use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AvatarPart::Table)
                    .if_not_exists()
                    .col(pk_auto(AvatarPart::Id))
                    .col(string_len(AvatarPart::Slot, 16))
                    .col(string(AvatarPart::Name))
                    .col(string(AvatarPart::SpriteKey))
                    .col(small_integer(AvatarPart::Layer))
                    .col(integer(AvatarPart::Price).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AvatarPart::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AvatarPart {
    Table,
    Id,
    Slot,
    Name,
    SpriteKey,
    Layer,
    Price,
}
