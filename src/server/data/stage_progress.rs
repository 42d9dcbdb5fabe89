//! Stage progress data repository for database operations.
//!
//! This module provides the `StageProgressRepository` for the per-student record of
//! stage completion. The submission path is a read-modify-write that keeps the best
//! score, flags the first clear exactly once, and counts attempts. The stage service
//! runs it inside the same transaction that grants first-clear rewards.

use crate::server::model::stage::StageProgress;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct StageProgressRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StageProgressRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, stage_id: i32, student_id: i32) -> Result<Option<StageProgress>, DbErr> {
        let entity = entity::prelude::StageProgress::find()
            .filter(entity::stage_progress::Column::StageId.eq(stage_id))
            .filter(entity::stage_progress::Column::StudentId.eq(student_id))
            .one(self.db)
            .await?;

        Ok(entity.map(StageProgress::from_entity))
    }

    /// Gets a student's progress rows for any of the given stages.
    pub async fn get_by_student(
        &self,
        student_id: i32,
        stage_ids: &[i32],
    ) -> Result<Vec<StageProgress>, DbErr> {
        if stage_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::StageProgress::find()
            .filter(entity::stage_progress::Column::StudentId.eq(student_id))
            .filter(entity::stage_progress::Column::StageId.is_in(stage_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StageProgress::from_entity).collect())
    }

    /// Gets cleared progress rows for any of the given students.
    ///
    /// The report service counts these per student.
    pub async fn get_cleared_by_students(
        &self,
        student_ids: &[i32],
    ) -> Result<Vec<StageProgress>, DbErr> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::StageProgress::find()
            .filter(entity::stage_progress::Column::StudentId.is_in(student_ids.to_vec()))
            .filter(entity::stage_progress::Column::Cleared.eq(true))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StageProgress::from_entity).collect())
    }

    /// Records one stage submission.
    ///
    /// Inserts a progress row on the first submission, otherwise updates the
    /// existing row: best score only ever increases, the cleared flag never
    /// reverts, and the first clear timestamp is written exactly once.
    ///
    /// # Arguments
    /// - `stage_id` - Stage that was submitted
    /// - `student_id` - Submitting student
    /// - `score` - Integer percent score of this submission
    /// - `passed` - Whether this submission met the pass threshold
    ///
    /// # Returns
    /// - `Ok((progress, first_clear))` - Updated progress and whether this
    ///   submission was the student's first clear of the stage
    pub async fn record_submission(
        &self,
        stage_id: i32,
        student_id: i32,
        score: i16,
        passed: bool,
    ) -> Result<(StageProgress, bool), DbErr> {
        let existing = entity::prelude::StageProgress::find()
            .filter(entity::stage_progress::Column::StageId.eq(stage_id))
            .filter(entity::stage_progress::Column::StudentId.eq(student_id))
            .one(self.db)
            .await?;

        match existing {
            None => {
                let entity = entity::stage_progress::ActiveModel {
                    stage_id: ActiveValue::Set(stage_id),
                    student_id: ActiveValue::Set(student_id),
                    best_score: ActiveValue::Set(score),
                    cleared: ActiveValue::Set(passed),
                    first_cleared_at: ActiveValue::Set(
                        passed.then(|| Utc::now().naive_utc()),
                    ),
                    attempts: ActiveValue::Set(1),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;

                Ok((StageProgress::from_entity(entity), passed))
            }
            Some(existing) => {
                let first_clear = passed && !existing.cleared;
                let best_score = existing.best_score.max(score);
                let cleared = existing.cleared || passed;
                let first_cleared_at = match existing.first_cleared_at {
                    Some(at) => Some(at),
                    None => first_clear.then(|| Utc::now().naive_utc()),
                };
                let attempts = existing.attempts + 1;

                let mut active_model: entity::stage_progress::ActiveModel = existing.into();
                active_model.best_score = ActiveValue::Set(best_score);
                active_model.cleared = ActiveValue::Set(cleared);
                active_model.first_cleared_at = ActiveValue::Set(first_cleared_at);
                active_model.attempts = ActiveValue::Set(attempts);

                let entity = active_model.update(self.db).await?;

                Ok((StageProgress::from_entity(entity), first_clear))
            }
        }
    }
}
