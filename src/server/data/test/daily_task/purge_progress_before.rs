use super::*;

/// Tests the midnight purge of stale progress rows.
///
/// Only rows dated strictly before the cutoff may go; today's progress must
/// survive the sweep.
///
/// Expected: one row purged, today's row intact
#[tokio::test]
async fn purges_only_rows_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_daily_task_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let task = factory::create_daily_task(db).await?;
    let yesterday = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    let repo = DailyTaskRepository::new(db);
    repo.increment_progress(task.id, student.id, yesterday, 3).await?;
    repo.increment_progress(task.id, student.id, today, 1).await?;

    let purged = repo.purge_progress_before(today).await?;

    assert_eq!(purged, 1);
    assert!(repo.get_progress(task.id, student.id, yesterday).await?.is_none());
    assert!(repo.get_progress(task.id, student.id, today).await?.is_some());

    Ok(())
}
