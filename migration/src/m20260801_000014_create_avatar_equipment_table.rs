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
                    .table(AvatarEquipment::Table)
                    .if_not_exists()
                    .col(integer(AvatarEquipment::StudentId))
                    .col(string_len(AvatarEquipment::Slot, 16))
                    .col(integer(AvatarEquipment::PartId))
                    .primary_key(
                        Index::create()
                            .col(AvatarEquipment::StudentId)
                            .col(AvatarEquipment::Slot),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_avatar_equipment_student_id")
                            .from(AvatarEquipment::Table, AvatarEquipment::StudentId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_avatar_equipment_part_id")
                            .from(AvatarEquipment::Table, AvatarEquipment::PartId)
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
            .drop_table(Table::drop().table(AvatarEquipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AvatarEquipment {
    Table,
    StudentId,
    Slot,
    PartId,
}
