//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts in the database.
//! It handles account creation, credential lookup for login, and the gold and exp
//! mutations issued by the stage, shop, and daily task services. Conversion between
//! entity models and domain models happens at this boundary.

use crate::server::model::user::{CreateUserParam, User, UserCredentials};
use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new account with zero gold and exp.
    ///
    /// # Arguments
    /// - `param` - Account parameters including the pre-hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(DbErr)` - Database error, including unique violations on the username
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            password_hash: ActiveValue::Set(param.password_hash),
            password_salt: ActiveValue::Set(param.password_salt),
            display_name: ActiveValue::Set(param.display_name),
            role: ActiveValue::Set(param.role),
            gold: ActiveValue::Set(0),
            exp: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user with their stored credentials for password verification.
    pub async fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    pub async fn username_taken(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if any teacher accounts exist.
    ///
    /// Used during startup to decide whether to seed the first teacher account.
    pub async fn teacher_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Teacher))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds gold and exp to an account in a single update.
    ///
    /// # Arguments
    /// - `user_id` - Account to credit
    /// - `gold` - Gold to add
    /// - `exp` - Exp to add
    pub async fn add_rewards(&self, user_id: i32, gold: i32, exp: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Gold,
                Expr::col(entity::user::Column::Gold).add(gold),
            )
            .col_expr(
                entity::user::Column::Exp,
                Expr::col(entity::user::Column::Exp).add(exp),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets an account's gold balance to an absolute value.
    ///
    /// The shop service re-reads the balance inside a transaction before
    /// calling this, so the subtraction happens on fresh data.
    pub async fn set_gold(&self, user_id: i32, gold: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::Gold, Expr::value(gold))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
