use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000005_create_unit_table::Unit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Question::Table)
                    .if_not_exists()
                    .col(pk_auto(Question::Id))
                    .col(integer(Question::UnitId))
                    .col(text(Question::Prompt))
                    .col(string(Question::OptionA))
                    .col(string(Question::OptionB))
                    .col(string(Question::OptionC))
                    .col(string(Question::OptionD))
                    .col(small_integer(Question::CorrectIndex))
                    .col(small_integer(Question::Difficulty).default(1))
                    .col(boolean(Question::Deleted).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_unit_id")
                            .from(Question::Table, Question::UnitId)
                            .to(Unit::Table, Unit::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Question::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Question {
    Table,
    Id,
    UnitId,
    Prompt,
    OptionA,
    OptionB,
    OptionC,
    OptionD,
    CorrectIndex,
    Difficulty,
    Deleted,
}
