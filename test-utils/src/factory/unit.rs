//! Unit factory for creating test curriculum units.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test units with customizable fields.
pub struct UnitFactory<'a> {
    db: &'a DatabaseConnection,
    subject_id: i32,
    name: String,
    grade_band: String,
    sort_order: i32,
}

impl<'a> UnitFactory<'a> {
    /// Creates a new UnitFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Unit {id}"` where id is auto-incremented
    /// - grade_band: `"3-4"`
    /// - sort_order: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `subject_id` - Parent subject ID
    pub fn new(db: &'a DatabaseConnection, subject_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            subject_id,
            name: format!("Unit {}", id),
            grade_band: "3-4".to_string(),
            sort_order: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn grade_band(mut self, grade_band: impl Into<String>) -> Self {
        self.grade_band = grade_band.into();
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Builds and inserts the unit entity into the database.
    pub async fn build(self) -> Result<entity::unit::Model, DbErr> {
        entity::unit::ActiveModel {
            id: ActiveValue::NotSet,
            subject_id: ActiveValue::Set(self.subject_id),
            name: ActiveValue::Set(self.name),
            grade_band: ActiveValue::Set(self.grade_band),
            sort_order: ActiveValue::Set(self.sort_order),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a unit with default values under the given subject.
pub async fn create_unit(
    db: &DatabaseConnection,
    subject_id: i32,
) -> Result<entity::unit::Model, DbErr> {
    UnitFactory::new(db, subject_id).build().await
}
