use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User, m20260801_000007_create_stage_table::Stage,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StageProgress::Table)
                    .if_not_exists()
                    .col(pk_auto(StageProgress::Id))
                    .col(integer(StageProgress::StageId))
                    .col(integer(StageProgress::StudentId))
                    .col(small_integer(StageProgress::BestScore).default(0))
                    .col(boolean(StageProgress::Cleared).default(false))
                    .col(timestamp_null(StageProgress::FirstClearedAt))
                    .col(integer(StageProgress::Attempts).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stage_progress_stage_id")
                            .from(StageProgress::Table, StageProgress::StageId)
                            .to(Stage::Table, Stage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stage_progress_student_id")
                            .from(StageProgress::Table, StageProgress::StudentId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stage_progress_unique")
                    .table(StageProgress::Table)
                    .col(StageProgress::StageId)
                    .col(StageProgress::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StageProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StageProgress {
    Table,
    Id,
    StageId,
    StudentId,
    BestScore,
    Cleared,
    FirstClearedAt,
    Attempts,
}
