use crate::server::{data::class::ClassRepository, model::class::CreateClassParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_student;
mod create;
mod find_by_join_code;
mod get_roster;
mod remove_student;
mod set_join_code;
