//! Question data repository for database operations.
//!
//! Questions are soft deleted so past attempt records keep a valid reference.
//! Every read in this repository filters deleted questions out.

use crate::server::model::question::{CreateQuestionParam, Question, UpdateQuestionParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct QuestionRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QuestionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateQuestionParam) -> Result<Question, DbErr> {
        let [option_a, option_b, option_c, option_d] = param.options;

        let entity = entity::question::ActiveModel {
            unit_id: ActiveValue::Set(param.unit_id),
            prompt: ActiveValue::Set(param.prompt),
            option_a: ActiveValue::Set(option_a),
            option_b: ActiveValue::Set(option_b),
            option_c: ActiveValue::Set(option_c),
            option_d: ActiveValue::Set(option_d),
            correct_index: ActiveValue::Set(param.correct_index),
            difficulty: ActiveValue::Set(param.difficulty),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Question::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Question>, DbErr> {
        let entity = entity::prelude::Question::find_by_id(id)
            .filter(entity::question::Column::Deleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Question::from_entity))
    }

    /// Gets paginated questions of a unit.
    ///
    /// # Returns
    /// - `Ok((questions, total))` - Questions for the requested page and total
    ///   question count for the unit
    pub async fn get_by_unit_paginated(
        &self,
        unit_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Question>, u64), DbErr> {
        let paginator = entity::prelude::Question::find()
            .filter(entity::question::Column::UnitId.eq(unit_id))
            .filter(entity::question::Column::Deleted.eq(false))
            .order_by_asc(entity::question::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let questions = entities.into_iter().map(Question::from_entity).collect();

        Ok((questions, total))
    }

    /// Gets all live questions belonging to any of the given units.
    ///
    /// The stage service shuffles and truncates this pool to build a quiz.
    pub async fn get_by_units(&self, unit_ids: &[i32]) -> Result<Vec<Question>, DbErr> {
        if unit_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Question::find()
            .filter(entity::question::Column::UnitId.is_in(unit_ids.to_vec()))
            .filter(entity::question::Column::Deleted.eq(false))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Question::from_entity).collect())
    }

    /// Counts live questions in a unit. Used by the unit delete guard.
    pub async fn count_by_unit(&self, unit_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Question::find()
            .filter(entity::question::Column::UnitId.eq(unit_id))
            .filter(entity::question::Column::Deleted.eq(false))
            .count(self.db)
            .await
    }

    pub async fn update(&self, id: i32, param: UpdateQuestionParam) -> Result<Question, DbErr> {
        let question = entity::prelude::Question::find_by_id(id)
            .filter(entity::question::Column::Deleted.eq(false))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Question with id {} not found",
                id
            )))?;

        let [option_a, option_b, option_c, option_d] = param.options;

        let mut active_model: entity::question::ActiveModel = question.into();
        active_model.prompt = ActiveValue::Set(param.prompt);
        active_model.option_a = ActiveValue::Set(option_a);
        active_model.option_b = ActiveValue::Set(option_b);
        active_model.option_c = ActiveValue::Set(option_c);
        active_model.option_d = ActiveValue::Set(option_d);
        active_model.correct_index = ActiveValue::Set(param.correct_index);
        active_model.difficulty = ActiveValue::Set(param.difficulty);

        let entity = active_model.update(self.db).await?;

        Ok(Question::from_entity(entity))
    }

    /// Marks a question deleted without removing the row.
    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Question::update_many()
            .filter(entity::question::Column::Id.eq(id))
            .col_expr(
                entity::question::Column::Deleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
