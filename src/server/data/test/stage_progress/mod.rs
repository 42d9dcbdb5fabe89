use crate::server::data::stage_progress::StageProgressRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_student;
mod get_cleared_by_students;
mod record_submission;
