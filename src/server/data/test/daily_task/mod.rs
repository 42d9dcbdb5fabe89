use crate::server::data::daily_task::DailyTaskRepository;
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod increment_progress;
mod mark_claimed;
mod purge_progress_before;
