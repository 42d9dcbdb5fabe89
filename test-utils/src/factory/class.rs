//! Class factory for creating test classes.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classes with customizable fields.
pub struct ClassFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    join_code: String,
    teacher_id: i32,
    archived: bool,
}

impl<'a> ClassFactory<'a> {
    /// Creates a new ClassFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Class {id}"` where id is auto-incremented
    /// - join_code: `"CODE{id}"`
    /// - archived: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `teacher_id` - Owning teacher's user ID
    pub fn new(db: &'a DatabaseConnection, teacher_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Class {}", id),
            join_code: format!("CODE{}", id),
            teacher_id,
            archived: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn join_code(mut self, join_code: impl Into<String>) -> Self {
        self.join_code = join_code.into();
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Builds and inserts the class entity into the database.
    pub async fn build(self) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            join_code: ActiveValue::Set(self.join_code),
            teacher_id: ActiveValue::Set(self.teacher_id),
            archived: ActiveValue::Set(self.archived),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a class with default values for the given teacher.
pub async fn create_class(
    db: &DatabaseConnection,
    teacher_id: i32,
) -> Result<entity::class::Model, DbErr> {
    ClassFactory::new(db, teacher_id).build().await
}
