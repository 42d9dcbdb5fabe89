//! Daily task data repository for database operations.
//!
//! This module manages both the task definitions teachers configure and the
//! per-student, per-day progress rows the game writes as side effects of
//! answering questions, clearing stages, and logging in. Progress rows older
//! than the current day are purged nightly by the scheduler.

use crate::server::model::daily_task::{
    CreateDailyTaskParam, DailyTask, DailyTaskProgress, UpdateDailyTaskParam,
};
use chrono::NaiveDate;
use entity::daily_task::DailyTaskKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct DailyTaskRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DailyTaskRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateDailyTaskParam) -> Result<DailyTask, DbErr> {
        let entity = entity::daily_task::ActiveModel {
            kind: ActiveValue::Set(param.kind),
            target: ActiveValue::Set(param.target),
            reward_gold: ActiveValue::Set(param.reward_gold),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DailyTask::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<DailyTask>, DbErr> {
        let entity = entity::prelude::DailyTask::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(DailyTask::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<DailyTask>, DbErr> {
        let entities = entity::prelude::DailyTask::find()
            .order_by_asc(entity::daily_task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DailyTask::from_entity).collect())
    }

    /// Gets all task definitions of one kind.
    ///
    /// Game events increment every task of the matching kind.
    pub async fn get_by_kind(&self, kind: DailyTaskKind) -> Result<Vec<DailyTask>, DbErr> {
        let entities = entity::prelude::DailyTask::find()
            .filter(entity::daily_task::Column::Kind.eq(kind))
            .order_by_asc(entity::daily_task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DailyTask::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: UpdateDailyTaskParam) -> Result<DailyTask, DbErr> {
        let task = entity::prelude::DailyTask::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Daily task with id {} not found",
                id
            )))?;

        let mut active_model: entity::daily_task::ActiveModel = task.into();
        active_model.target = ActiveValue::Set(param.target);
        active_model.reward_gold = ActiveValue::Set(param.reward_gold);

        let entity = active_model.update(self.db).await?;

        Ok(DailyTask::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::DailyTaskProgress::delete_many()
            .filter(entity::daily_task_progress::Column::TaskId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::DailyTask::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets a student's progress rows for one date.
    pub async fn get_progress_for_date(
        &self,
        student_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<DailyTaskProgress>, DbErr> {
        let entities = entity::prelude::DailyTaskProgress::find()
            .filter(entity::daily_task_progress::Column::StudentId.eq(student_id))
            .filter(entity::daily_task_progress::Column::TaskDate.eq(date))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(DailyTaskProgress::from_entity)
            .collect())
    }

    pub async fn get_progress(
        &self,
        task_id: i32,
        student_id: i32,
        date: NaiveDate,
    ) -> Result<Option<DailyTaskProgress>, DbErr> {
        let entity = entity::prelude::DailyTaskProgress::find()
            .filter(entity::daily_task_progress::Column::TaskId.eq(task_id))
            .filter(entity::daily_task_progress::Column::StudentId.eq(student_id))
            .filter(entity::daily_task_progress::Column::TaskDate.eq(date))
            .one(self.db)
            .await?;

        Ok(entity.map(DailyTaskProgress::from_entity))
    }

    /// Adds to a student's count for one task on one date, creating the row on
    /// first progress. Counts past the target are kept as-is; claims only check
    /// the threshold.
    pub async fn increment_progress(
        &self,
        task_id: i32,
        student_id: i32,
        date: NaiveDate,
        amount: i32,
    ) -> Result<DailyTaskProgress, DbErr> {
        let existing = entity::prelude::DailyTaskProgress::find()
            .filter(entity::daily_task_progress::Column::TaskId.eq(task_id))
            .filter(entity::daily_task_progress::Column::StudentId.eq(student_id))
            .filter(entity::daily_task_progress::Column::TaskDate.eq(date))
            .one(self.db)
            .await?;

        let entity = match existing {
            None => {
                entity::daily_task_progress::ActiveModel {
                    task_id: ActiveValue::Set(task_id),
                    student_id: ActiveValue::Set(student_id),
                    task_date: ActiveValue::Set(date),
                    count: ActiveValue::Set(amount),
                    claimed: ActiveValue::Set(false),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
            Some(existing) => {
                let count = existing.count + amount;

                let mut active_model: entity::daily_task_progress::ActiveModel = existing.into();
                active_model.count = ActiveValue::Set(count);
                active_model.update(self.db).await?
            }
        };

        Ok(DailyTaskProgress::from_entity(entity))
    }

    /// Marks a progress row claimed.
    pub async fn mark_claimed(
        &self,
        task_id: i32,
        student_id: i32,
        date: NaiveDate,
    ) -> Result<(), DbErr> {
        entity::prelude::DailyTaskProgress::update_many()
            .filter(entity::daily_task_progress::Column::TaskId.eq(task_id))
            .filter(entity::daily_task_progress::Column::StudentId.eq(student_id))
            .filter(entity::daily_task_progress::Column::TaskDate.eq(date))
            .col_expr(
                entity::daily_task_progress::Column::Claimed,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes progress rows dated before the given day.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows purged
    pub async fn purge_progress_before(&self, date: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::DailyTaskProgress::delete_many()
            .filter(entity::daily_task_progress::Column::TaskDate.lt(date))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
