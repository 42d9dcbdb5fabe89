use super::*;

/// Tests the first progress event of the day.
///
/// Expected: a fresh unclaimed row holding the increment
#[tokio::test]
async fn first_event_creates_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_daily_task_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let task = factory::create_daily_task(db).await?;
    let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    let repo = DailyTaskRepository::new(db);
    let progress = repo.increment_progress(task.id, student.id, today, 1).await?;

    assert_eq!(progress.count, 1);
    assert!(!progress.claimed);
    assert_eq!(progress.task_date, today);

    Ok(())
}

/// Tests that later events on the same day accumulate on one row.
///
/// Expected: count climbing past the target without clamping
#[tokio::test]
async fn same_day_events_accumulate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_daily_task_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let task = factory::daily_task::DailyTaskFactory::new(db)
        .target(2)
        .build()
        .await?;
    let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    let repo = DailyTaskRepository::new(db);
    repo.increment_progress(task.id, student.id, today, 1).await?;
    repo.increment_progress(task.id, student.id, today, 1).await?;
    let progress = repo.increment_progress(task.id, student.id, today, 1).await?;

    assert_eq!(progress.count, 3);

    Ok(())
}

/// Tests that each day gets its own progress row.
///
/// Expected: the second day starting from a fresh count
#[tokio::test]
async fn new_day_starts_fresh() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_daily_task_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let task = factory::create_daily_task(db).await?;
    let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let tuesday = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();

    let repo = DailyTaskRepository::new(db);
    repo.increment_progress(task.id, student.id, monday, 4).await?;
    let progress = repo.increment_progress(task.id, student.id, tuesday, 1).await?;

    assert_eq!(progress.count, 1);
    assert_eq!(progress.task_date, tuesday);

    Ok(())
}
