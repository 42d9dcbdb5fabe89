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
                    .table(Stage::Table)
                    .if_not_exists()
                    .col(pk_auto(Stage::Id))
                    .col(integer(Stage::ClassId))
                    .col(string(Stage::Name))
                    .col(integer(Stage::SortOrder).default(0))
                    .col(string_len(Stage::UnlockRule, 16))
                    .col(integer(Stage::MinLevel).default(1))
                    .col(integer_null(Stage::DependencyStageId))
                    .col(small_integer(Stage::PassThreshold))
                    .col(small_integer(Stage::QuestionCount))
                    .col(integer(Stage::RewardGold).default(0))
                    .col(integer(Stage::RewardExp).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stage_class_id")
                            .from(Stage::Table, Stage::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stage_dependency_stage_id")
                            .from(Stage::Table, Stage::DependencyStageId)
                            .to(Stage::Table, Stage::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Stage {
    Table,
    Id,
    ClassId,
    Name,
    SortOrder,
    UnlockRule,
    MinLevel,
    DependencyStageId,
    PassThreshold,
    QuestionCount,
    RewardGold,
    RewardExp,
}
