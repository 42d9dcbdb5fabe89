//! Cron jobs for automated maintenance.

pub mod daily_tasks;
