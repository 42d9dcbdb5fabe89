use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000004_create_subject_table::Subject;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Unit::Table)
                    .if_not_exists()
                    .col(pk_auto(Unit::Id))
                    .col(integer(Unit::SubjectId))
                    .col(string(Unit::Name))
                    .col(string(Unit::GradeBand))
                    .col(integer(Unit::SortOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_unit_subject_id")
                            .from(Unit::Table, Unit::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Unit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Unit {
    Table,
    Id,
    SubjectId,
    Name,
    GradeBand,
    SortOrder,
}
