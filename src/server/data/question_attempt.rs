use crate::server::model::question::{CreateAttemptParam, QuestionAttempt};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct QuestionAttemptRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QuestionAttemptRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAttemptParam) -> Result<QuestionAttempt, DbErr> {
        let entity = entity::question_attempt::ActiveModel {
            question_id: ActiveValue::Set(param.question_id),
            student_id: ActiveValue::Set(param.student_id),
            chosen_index: ActiveValue::Set(param.chosen_index),
            correct: ActiveValue::Set(param.correct),
            stage_id: ActiveValue::Set(param.stage_id),
            answered_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(QuestionAttempt::from_entity(entity))
    }

    /// Gets all attempts made by any of the given students.
    ///
    /// The report service folds these into per-student aggregates.
    pub async fn get_by_students(&self, student_ids: &[i32]) -> Result<Vec<QuestionAttempt>, DbErr> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::QuestionAttempt::find()
            .filter(entity::question_attempt::Column::StudentId.is_in(student_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(QuestionAttempt::from_entity)
            .collect())
    }

    /// Gets attempts with the unit each answered question belongs to.
    ///
    /// # Returns
    /// - `Ok(Vec<(unit_id, attempt)>)` - Attempts whose question still exists,
    ///   paired with that question's unit
    pub async fn get_with_units_by_students(
        &self,
        student_ids: &[i32],
    ) -> Result<Vec<(i32, QuestionAttempt)>, DbErr> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::QuestionAttempt::find()
            .filter(entity::question_attempt::Column::StudentId.is_in(student_ids.to_vec()))
            .find_also_related(entity::prelude::Question)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(attempt, question)| {
                question.map(|question| (question.unit_id, QuestionAttempt::from_entity(attempt)))
            })
            .collect())
    }
}
