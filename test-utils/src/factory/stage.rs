//! Stage factory for creating test RPG stages.

use crate::factory::helpers::next_id;
use entity::stage::UnlockRule;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stages with customizable fields.
pub struct StageFactory<'a> {
    db: &'a DatabaseConnection,
    class_id: i32,
    name: String,
    sort_order: i32,
    unlock_rule: UnlockRule,
    min_level: i32,
    dependency_stage_id: Option<i32>,
    pass_threshold: i16,
    question_count: i16,
    reward_gold: i32,
    reward_exp: i32,
}

impl<'a> StageFactory<'a> {
    /// Creates a new StageFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Stage {id}"` where id is auto-incremented
    /// - sort_order: `0`
    /// - unlock_rule: `Sequential`
    /// - min_level: `1`
    /// - pass_threshold: `70`
    /// - question_count: `5`
    /// - reward_gold: `10`
    /// - reward_exp: `50`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `class_id` - Owning class ID
    pub fn new(db: &'a DatabaseConnection, class_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            class_id,
            name: format!("Stage {}", id),
            sort_order: 0,
            unlock_rule: UnlockRule::Sequential,
            min_level: 1,
            dependency_stage_id: None,
            pass_threshold: 70,
            question_count: 5,
            reward_gold: 10,
            reward_exp: 50,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn unlock_rule(mut self, unlock_rule: UnlockRule) -> Self {
        self.unlock_rule = unlock_rule;
        self
    }

    pub fn min_level(mut self, min_level: i32) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn dependency_stage_id(mut self, dependency_stage_id: Option<i32>) -> Self {
        self.dependency_stage_id = dependency_stage_id;
        self
    }

    pub fn pass_threshold(mut self, pass_threshold: i16) -> Self {
        self.pass_threshold = pass_threshold;
        self
    }

    pub fn question_count(mut self, question_count: i16) -> Self {
        self.question_count = question_count;
        self
    }

    pub fn reward_gold(mut self, reward_gold: i32) -> Self {
        self.reward_gold = reward_gold;
        self
    }

    pub fn reward_exp(mut self, reward_exp: i32) -> Self {
        self.reward_exp = reward_exp;
        self
    }

    /// Builds and inserts the stage entity into the database.
    pub async fn build(self) -> Result<entity::stage::Model, DbErr> {
        entity::stage::ActiveModel {
            id: ActiveValue::NotSet,
            class_id: ActiveValue::Set(self.class_id),
            name: ActiveValue::Set(self.name),
            sort_order: ActiveValue::Set(self.sort_order),
            unlock_rule: ActiveValue::Set(self.unlock_rule),
            min_level: ActiveValue::Set(self.min_level),
            dependency_stage_id: ActiveValue::Set(self.dependency_stage_id),
            pass_threshold: ActiveValue::Set(self.pass_threshold),
            question_count: ActiveValue::Set(self.question_count),
            reward_gold: ActiveValue::Set(self.reward_gold),
            reward_exp: ActiveValue::Set(self.reward_exp),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a stage with default values in the given class.
pub async fn create_stage(
    db: &DatabaseConnection,
    class_id: i32,
) -> Result<entity::stage::Model, DbErr> {
    StageFactory::new(db, class_id).build().await
}
