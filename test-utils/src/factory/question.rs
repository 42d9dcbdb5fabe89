//! Question factory for creating test multiple-choice questions.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test questions with customizable fields.
pub struct QuestionFactory<'a> {
    db: &'a DatabaseConnection,
    unit_id: i32,
    prompt: String,
    options: [String; 4],
    correct_index: i16,
    difficulty: i16,
    deleted: bool,
}

impl<'a> QuestionFactory<'a> {
    /// Creates a new QuestionFactory with default values.
    ///
    /// Defaults:
    /// - prompt: `"Question {id}?"` where id is auto-incremented
    /// - options: `["A", "B", "C", "D"]`
    /// - correct_index: `0`
    /// - difficulty: `1`
    /// - deleted: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `unit_id` - Parent unit ID
    pub fn new(db: &'a DatabaseConnection, unit_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            unit_id,
            prompt: format!("Question {}?", id),
            options: [
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
                "D".to_string(),
            ],
            correct_index: 0,
            difficulty: 1,
            deleted: false,
        }
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn options(mut self, options: [String; 4]) -> Self {
        self.options = options;
        self
    }

    pub fn correct_index(mut self, correct_index: i16) -> Self {
        self.correct_index = correct_index;
        self
    }

    pub fn difficulty(mut self, difficulty: i16) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the question entity into the database.
    pub async fn build(self) -> Result<entity::question::Model, DbErr> {
        let [option_a, option_b, option_c, option_d] = self.options;

        entity::question::ActiveModel {
            id: ActiveValue::NotSet,
            unit_id: ActiveValue::Set(self.unit_id),
            prompt: ActiveValue::Set(self.prompt),
            option_a: ActiveValue::Set(option_a),
            option_b: ActiveValue::Set(option_b),
            option_c: ActiveValue::Set(option_c),
            option_d: ActiveValue::Set(option_d),
            correct_index: ActiveValue::Set(self.correct_index),
            difficulty: ActiveValue::Set(self.difficulty),
            deleted: ActiveValue::Set(self.deleted),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a question with default values in the given unit.
pub async fn create_question(
    db: &DatabaseConnection,
    unit_id: i32,
) -> Result<entity::question::Model, DbErr> {
    QuestionFactory::new(db, unit_id).build().await
}
