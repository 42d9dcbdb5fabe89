//! Authentication service for registration, login, and logout.
//!
//! Passwords are stored as salted hashes and verified in constant shape: an
//! unknown username and a wrong password both fail with the same generic 401,
//! so the login endpoint does not reveal which accounts exist.

use entity::daily_task::DailyTaskKind;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::{LoginDto, RegisterDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::CreateUserParam,
        service::daily_task,
        util::password::{hash_password, verify_password},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new teacher account.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created account
    /// - `Err(AppError::BadRequest(_))` - Invalid input or username taken
    pub async fn register(&self, dto: RegisterDto) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        let username = dto.username.trim().to_string();
        validate_username(&username)?;
        validate_password(&dto.password)?;

        if dto.display_name.trim().is_empty() {
            return Err(AppError::BadRequest("Display name is required".to_string()));
        }

        if repo.username_taken(&username).await? {
            return Err(AppError::BadRequest("Username is already taken".to_string()));
        }

        let (password_hash, password_salt) = hash_password(&dto.password);

        let user = repo
            .create(CreateUserParam {
                username,
                password_hash,
                password_salt,
                display_name: dto.display_name.trim().to_string(),
                role: entity::user::UserRole::Teacher,
            })
            .await?;

        Ok(user.into_dto())
    }

    /// Verifies credentials and stores the user id in the session.
    ///
    /// A successful student login also counts toward login-kind daily tasks.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The authenticated user
    /// - `Err(AppError::AuthErr(_))` - Unknown username or wrong password
    pub async fn login(&self, session: &Session, dto: LoginDto) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(credentials) = repo.find_credentials(dto.username.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(
            &dto.password,
            &credentials.password_salt,
            &credentials.password_hash,
        ) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = credentials.user;
        AuthSession::new(session).set_user_id(user.id).await?;

        if user.role == entity::user::UserRole::Student {
            daily_task::record_event(self.db, user.id, DailyTaskKind::Login).await?;
        }

        Ok(user.into_dto())
    }

    pub async fn logout(&self, session: &Session) {
        AuthSession::new(session).clear().await;
    }
}

fn validate_username(username: &str) -> Result<(), AppError> {
    if username.len() < 3 || username.len() > 32 {
        return Err(AppError::BadRequest(
            "Username must be between 3 and 32 characters".to_string(),
        ));
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(AppError::BadRequest(
            "Username may only contain letters, digits, and underscores".to_string(),
        ));
    }

    Ok(())
}

pub(crate) fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < 6 {
        return Err(AppError::BadRequest(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_usernames() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("abc").is_ok());
    }

    #[test]
    fn rejects_usernames_with_symbols() {
        assert!(validate_username("teacher!").is_err());
        assert!(validate_username("ms_frizzle").is_ok());
    }

    #[test]
    fn rejects_short_passwords() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }
}
