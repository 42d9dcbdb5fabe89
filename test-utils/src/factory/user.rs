//! User factory for creating test teacher and student accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
/// use entity::user::UserRole;
///
/// let user = UserFactory::new(&db)
///     .username("custom_user")
///     .role(UserRole::Teacher)
///     .gold(500)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    display_name: String,
    role: UserRole,
    gold: i32,
    exp: i32,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - display_name: `"User {id}"`
    /// - role: `Student`
    /// - gold: `0`
    /// - exp: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user_{}", id),
            display_name: format!("User {}", id),
            role: UserRole::Student,
            gold: 0,
            exp: 0,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn gold(mut self, gold: i32) -> Self {
        self.gold = gold;
        self
    }

    pub fn exp(mut self, exp: i32) -> Self {
        self.exp = exp;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set("test-hash".to_string()),
            password_salt: ActiveValue::Set("test-salt".to_string()),
            display_name: ActiveValue::Set(self.display_name),
            role: ActiveValue::Set(self.role),
            gold: ActiveValue::Set(self.gold),
            exp: ActiveValue::Set(self.exp),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student account with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a teacher account with default values.
pub async fn create_teacher(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(UserRole::Teacher).build().await
}
