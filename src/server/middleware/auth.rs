//! Authentication guard for request handlers.
//!
//! Controllers construct an `AuthGuard` from the database connection and the
//! request session, then call `require` with the roles the endpoint accepts.
//! The guard resolves the session identity to a user and enforces the role
//! check, returning the user for further use in the handler.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Role requirement an endpoint may impose.
pub enum Permission {
    Teacher,
    Student,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session to a user and checks their role against the
    /// listed permissions. The user must hold at least one of them.
    ///
    /// An empty permission slice only requires an authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding one of the permissions
    /// - `Err(AppError::AuthErr(_))` - Missing session, stale user, or role mismatch
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let allowed = permissions.is_empty()
            || permissions.iter().any(|permission| match permission {
                Permission::Teacher => user.role == UserRole::Teacher,
                Permission::Student => user.role == UserRole::Student,
            });

        if !allowed {
            return Err(AuthError::AccessDenied(
                user_id,
                "Endpoint requires a role the user does not hold".to_string(),
            )
            .into());
        }

        Ok(user)
    }
}
