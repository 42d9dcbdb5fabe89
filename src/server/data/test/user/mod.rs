use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod add_rewards;
mod create;
mod find_credentials;
mod set_gold;
mod teacher_exists;
mod username_taken;
