use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyTask::Table)
                    .if_not_exists()
                    .col(pk_auto(DailyTask::Id))
                    .col(string_len(DailyTask::Kind, 20))
                    .col(integer(DailyTask::Target))
                    .col(integer(DailyTask::RewardGold))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyTask::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DailyTask {
    Table,
    Id,
    Kind,
    Target,
    RewardGold,
}
