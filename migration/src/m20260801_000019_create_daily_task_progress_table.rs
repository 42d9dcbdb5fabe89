use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260801_000018_create_daily_task_table::DailyTask,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyTaskProgress::Table)
                    .if_not_exists()
                    .col(pk_auto(DailyTaskProgress::Id))
                    .col(integer(DailyTaskProgress::TaskId))
                    .col(integer(DailyTaskProgress::StudentId))
                    .col(date(DailyTaskProgress::TaskDate))
                    .col(integer(DailyTaskProgress::Count).default(0))
                    .col(boolean(DailyTaskProgress::Claimed).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_daily_task_progress_task_id")
                            .from(DailyTaskProgress::Table, DailyTaskProgress::TaskId)
                            .to(DailyTask::Table, DailyTask::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_daily_task_progress_student_id")
                            .from(DailyTaskProgress::Table, DailyTaskProgress::StudentId)
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
                    .name("idx_daily_task_progress_unique")
                    .table(DailyTaskProgress::Table)
                    .col(DailyTaskProgress::TaskId)
                    .col(DailyTaskProgress::StudentId)
                    .col(DailyTaskProgress::TaskDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyTaskProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DailyTaskProgress {
    Table,
    Id,
    TaskId,
    StudentId,
    TaskDate,
    Count,
    Claimed,
}
