use super::*;

/// Tests claiming a day's progress row.
///
/// Expected: the row flagged claimed with its count untouched
#[tokio::test]
async fn flags_row_claimed() -> Result<(), DbErr> {
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
    repo.increment_progress(task.id, student.id, today, 5).await?;
    repo.mark_claimed(task.id, student.id, today).await?;

    let progress = repo.get_progress(task.id, student.id, today).await?.unwrap();
    assert!(progress.claimed);
    assert_eq!(progress.count, 5);

    Ok(())
}
