//! User domain model, level curve, and user operation parameters.

use chrono::NaiveDateTime;
use entity::user::UserRole;
use sea_orm::ActiveEnum;

use crate::model::user::UserDto;

/// Cumulative exp required to hold level `n` is `50 * n * (n - 1)`.
///
/// Level 1 is the floor: a fresh account with 0 exp is level 1, level 2 takes
/// 100 exp, level 3 takes 300, and so on.
pub fn level_for_exp(exp: i32) -> i32 {
    let mut level = 1;
    while 50 * (level + 1) * level <= exp {
        level += 1;
    }
    level
}

/// A platform account, either a teacher or a student.
///
/// Gold and exp only ever change for students; the columns exist on every
/// account but stay zero for teachers.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub display_name: String,
    pub role: UserRole,
    pub gold: i32,
    pub exp: i32,
    pub created_at: NaiveDateTime,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            display_name: entity.display_name,
            role: entity.role,
            gold: entity.gold,
            exp: entity.exp,
            created_at: entity.created_at,
        }
    }

    /// Level derived from total exp; never stored.
    pub fn level(&self) -> i32 {
        level_for_exp(self.exp)
    }

    pub fn into_dto(self) -> UserDto {
        let level = self.level();
        UserDto {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            role: self.role.to_value(),
            gold: self.gold,
            exp: self.exp,
            level,
        }
    }
}

/// A user together with their stored password hash and salt.
///
/// Only the login path sees this; the hash and salt never leave the auth
/// service.
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
    pub password_salt: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            password_hash: entity.password_hash.clone(),
            password_salt: entity.password_salt.clone(),
            user: User::from_entity(entity),
        }
    }
}

/// Parameters for creating a new account.
pub struct CreateUserParam {
    pub username: String,
    pub password_hash: String,
    pub password_salt: String,
    pub display_name: String,
    pub role: UserRole,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fresh_account_is_level_one() {
        assert_eq!(level_for_exp(0), 1);
        assert_eq!(level_for_exp(99), 1);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(level_for_exp(100), 2);
        assert_eq!(level_for_exp(299), 2);
        assert_eq!(level_for_exp(300), 3);
        assert_eq!(level_for_exp(600), 4);
    }

    #[test]
    fn level_is_monotonic() {
        let mut previous = 0;
        for exp in (0..5000).step_by(50) {
            let level = level_for_exp(exp);
            assert!(level >= previous);
            previous = level;
        }
    }
}
