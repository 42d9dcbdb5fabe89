//! Stage data repository for database operations.
//!
//! Stages draw their quiz pool from curriculum units through the `stage_unit`
//! junction table, managed here alongside the stage records themselves.

use crate::server::model::stage::{CreateStageParam, Stage, UpdateStageParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct StageRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateStageParam) -> Result<Stage, DbErr> {
        let entity = entity::stage::ActiveModel {
            class_id: ActiveValue::Set(param.class_id),
            name: ActiveValue::Set(param.name),
            sort_order: ActiveValue::Set(param.sort_order),
            unlock_rule: ActiveValue::Set(param.unlock_rule),
            min_level: ActiveValue::Set(param.min_level),
            dependency_stage_id: ActiveValue::Set(param.dependency_stage_id),
            pass_threshold: ActiveValue::Set(param.pass_threshold),
            question_count: ActiveValue::Set(param.question_count),
            reward_gold: ActiveValue::Set(param.reward_gold),
            reward_exp: ActiveValue::Set(param.reward_exp),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Stage::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Stage>, DbErr> {
        let entity = entity::prelude::Stage::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Stage::from_entity))
    }

    /// Gets all stages of a class ordered by sort order.
    ///
    /// The order matters: the sequential unlock rule reads "previous stage"
    /// from this ordering.
    pub async fn get_by_class(&self, class_id: i32) -> Result<Vec<Stage>, DbErr> {
        let entities = entity::prelude::Stage::find()
            .filter(entity::stage::Column::ClassId.eq(class_id))
            .order_by_asc(entity::stage::Column::SortOrder)
            .order_by_asc(entity::stage::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Stage::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: UpdateStageParam) -> Result<Stage, DbErr> {
        let stage = entity::prelude::Stage::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Stage with id {} not found",
                id
            )))?;

        let mut active_model: entity::stage::ActiveModel = stage.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.sort_order = ActiveValue::Set(param.sort_order);
        active_model.unlock_rule = ActiveValue::Set(param.unlock_rule);
        active_model.min_level = ActiveValue::Set(param.min_level);
        active_model.dependency_stage_id = ActiveValue::Set(param.dependency_stage_id);
        active_model.pass_threshold = ActiveValue::Set(param.pass_threshold);
        active_model.question_count = ActiveValue::Set(param.question_count);
        active_model.reward_gold = ActiveValue::Set(param.reward_gold);
        active_model.reward_exp = ActiveValue::Set(param.reward_exp);

        let entity = active_model.update(self.db).await?;

        Ok(Stage::from_entity(entity))
    }

    /// Deletes a stage with its unit links and all student progress.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::StageUnit::delete_many()
            .filter(entity::stage_unit::Column::StageId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::StageProgress::delete_many()
            .filter(entity::stage_progress::Column::StageId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Stage::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Replaces the set of units a stage draws questions from.
    pub async fn set_units(&self, stage_id: i32, unit_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::StageUnit::delete_many()
            .filter(entity::stage_unit::Column::StageId.eq(stage_id))
            .exec(self.db)
            .await?;

        if unit_ids.is_empty() {
            return Ok(());
        }

        let links = unit_ids.iter().map(|unit_id| entity::stage_unit::ActiveModel {
            stage_id: ActiveValue::Set(stage_id),
            unit_id: ActiveValue::Set(*unit_id),
        });

        entity::prelude::StageUnit::insert_many(links)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_unit_ids(&self, stage_id: i32) -> Result<Vec<i32>, DbErr> {
        let links = entity::prelude::StageUnit::find()
            .filter(entity::stage_unit::Column::StageId.eq(stage_id))
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|link| link.unit_id).collect())
    }

    /// Counts stage links referencing a unit. Used by the unit delete guard.
    pub async fn count_links_by_unit(&self, unit_id: i32) -> Result<u64, DbErr> {
        entity::prelude::StageUnit::find()
            .filter(entity::stage_unit::Column::UnitId.eq(unit_id))
            .count(self.db)
            .await
    }
}
