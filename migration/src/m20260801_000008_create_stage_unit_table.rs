use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000005_create_unit_table::Unit, m20260801_000007_create_stage_table::Stage,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StageUnit::Table)
                    .if_not_exists()
                    .col(integer(StageUnit::StageId))
                    .col(integer(StageUnit::UnitId))
                    .primary_key(
                        Index::create()
                            .col(StageUnit::StageId)
                            .col(StageUnit::UnitId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stage_unit_stage_id")
                            .from(StageUnit::Table, StageUnit::StageId)
                            .to(Stage::Table, Stage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stage_unit_unit_id")
                            .from(StageUnit::Table, StageUnit::UnitId)
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
            .drop_table(Table::drop().table(StageUnit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StageUnit {
    Table,
    StageId,
    UnitId,
}
