//! Daily task factory for creating test task definitions.

use entity::daily_task::DailyTaskKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test daily tasks with customizable fields.
pub struct DailyTaskFactory<'a> {
    db: &'a DatabaseConnection,
    kind: DailyTaskKind,
    target: i32,
    reward_gold: i32,
}

impl<'a> DailyTaskFactory<'a> {
    /// Creates a new DailyTaskFactory with default values.
    ///
    /// Defaults:
    /// - kind: `AnswerQuestions`
    /// - target: `5`
    /// - reward_gold: `20`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            kind: DailyTaskKind::AnswerQuestions,
            target: 5,
            reward_gold: 20,
        }
    }

    pub fn kind(mut self, kind: DailyTaskKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn target(mut self, target: i32) -> Self {
        self.target = target;
        self
    }

    pub fn reward_gold(mut self, reward_gold: i32) -> Self {
        self.reward_gold = reward_gold;
        self
    }

    /// Builds and inserts the daily task entity into the database.
    pub async fn build(self) -> Result<entity::daily_task::Model, DbErr> {
        entity::daily_task::ActiveModel {
            id: ActiveValue::NotSet,
            kind: ActiveValue::Set(self.kind),
            target: ActiveValue::Set(self.target),
            reward_gold: ActiveValue::Set(self.reward_gold),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a daily task with default values.
pub async fn create_daily_task(
    db: &DatabaseConnection,
) -> Result<entity::daily_task::Model, DbErr> {
    DailyTaskFactory::new(db).build().await
}
