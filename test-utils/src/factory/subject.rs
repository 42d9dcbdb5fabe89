//! Subject factory for creating test curriculum subjects.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subjects with customizable fields.
pub struct SubjectFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    sort_order: i32,
}

impl<'a> SubjectFactory<'a> {
    /// Creates a new SubjectFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Subject {id}"` where id is auto-incremented
    /// - sort_order: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Subject {}", id),
            sort_order: 0,
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

    /// Builds and inserts the subject entity into the database.
    pub async fn build(self) -> Result<entity::subject::Model, DbErr> {
        entity::subject::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            sort_order: ActiveValue::Set(self.sort_order),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subject with default values.
pub async fn create_subject(db: &DatabaseConnection) -> Result<entity::subject::Model, DbErr> {
    SubjectFactory::new(db).build().await
}
