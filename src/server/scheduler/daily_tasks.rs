use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::daily_task::DailyTaskRepository, error::AppError};

/// Starts the daily task reset scheduler.
///
/// Progress rows are keyed by date, so a new day starts fresh without any
/// writes. This job only prunes rows from days before today, at midnight UTC,
/// keeping the progress table from growing without bound.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Midnight UTC, every day
    let job = Job::new_async("0 0 0 * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = purge_stale_progress(&db).await {
                tracing::error!("Error purging daily task progress: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Daily task reset scheduler started");

    Ok(())
}

/// Deletes progress rows dated before today.
async fn purge_stale_progress(db: &DatabaseConnection) -> Result<(), AppError> {
    let today = Utc::now().date_naive();

    let purged = DailyTaskRepository::new(db)
        .purge_progress_before(today)
        .await?;

    if purged > 0 {
        tracing::info!("Purged {} stale daily task progress rows", purged);
    }

    Ok(())
}
