use super::*;

/// Tests fetching a student's progress for a set of stages.
///
/// Expected: only rows for the requested stages and student
#[tokio::test]
async fn returns_rows_for_requested_stages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stage_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
    let first = factory::create_stage(db, class.id).await?;
    let second = factory::create_stage(db, class.id).await?;
    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;

    let repo = StageProgressRepository::new(db);
    repo.record_submission(first.id, student.id, 70, true).await?;
    repo.record_submission(second.id, other.id, 90, true).await?;

    let rows = repo.get_by_student(student.id, &[first.id, second.id]).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].stage_id, first.id);
    assert_eq!(rows[0].student_id, student.id);

    Ok(())
}

/// Tests the empty stage list shortcut.
///
/// Expected: Ok with no rows and no query issued
#[tokio::test]
async fn empty_stage_list_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stage_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StageProgressRepository::new(db);
    let rows = repo.get_by_student(student.id, &[]).await?;

    assert!(rows.is_empty());

    Ok(())
}
