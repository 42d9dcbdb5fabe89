use super::*;

/// Tests fetching cleared rows for a group of students.
///
/// Uncleared progress must be filtered out so report counts only reflect
/// actual clears.
///
/// Expected: only cleared rows for the listed students
#[tokio::test]
async fn returns_only_cleared_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stage_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
    let first = factory::create_stage(db, class.id).await?;
    let second = factory::create_stage(db, class.id).await?;
    let student = factory::create_student(db).await?;

    let repo = StageProgressRepository::new(db);
    repo.record_submission(first.id, student.id, 90, true).await?;
    repo.record_submission(second.id, student.id, 30, false).await?;

    let rows = repo.get_cleared_by_students(&[student.id]).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].stage_id, first.id);

    Ok(())
}
