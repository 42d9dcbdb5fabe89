use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260801_000013_create_avatar_part_table::AvatarPart,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AvatarOwnership::Table)
                    .if_not_exists()
                    .col(integer(AvatarOwnership::StudentId))
                    .col(integer(AvatarOwnership::PartId))
                    .primary_key(
                        Index::create()
                            .col(AvatarOwnership::StudentId)
                            .col(AvatarOwnership::PartId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_avatar_ownership_student_id")
                            .from(AvatarOwnership::Table, AvatarOwnership::StudentId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_avatar_ownership_part_id")
                            .from(AvatarOwnership::Table, AvatarOwnership::PartId)
                            .to(AvatarPart::Table, AvatarPart::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AvatarOwnership::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AvatarOwnership {
    Table,
    StudentId,
    PartId,
}
