use super::*;

/// Tests the first submission for a stage.
///
/// Expected: a fresh row with one attempt and first_clear matching the
/// pass flag
#[tokio::test]
async fn first_passing_submission_is_first_clear() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stage_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
    let stage = factory::create_stage(db, class.id).await?;
    let student = factory::create_student(db).await?;

    let repo = StageProgressRepository::new(db);
    let (progress, first_clear) = repo
        .record_submission(stage.id, student.id, 80, true)
        .await?;

    assert!(first_clear);
    assert!(progress.cleared);
    assert_eq!(progress.best_score, 80);
    assert_eq!(progress.attempts, 1);
    assert!(progress.first_cleared_at.is_some());

    Ok(())
}

/// Tests a failing submission followed by a passing retry.
///
/// The clear must only be reported on the submission that actually passes,
/// and the best score must track the maximum.
///
/// Expected: first_clear false then true, best score 85
#[tokio::test]
async fn clear_is_reported_on_the_passing_retry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stage_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
    let stage = factory::create_stage(db, class.id).await?;
    let student = factory::create_student(db).await?;

    let repo = StageProgressRepository::new(db);

    let (progress, first_clear) = repo
        .record_submission(stage.id, student.id, 40, false)
        .await?;
    assert!(!first_clear);
    assert!(!progress.cleared);
    assert!(progress.first_cleared_at.is_none());

    let (progress, first_clear) = repo
        .record_submission(stage.id, student.id, 85, true)
        .await?;
    assert!(first_clear);
    assert!(progress.cleared);
    assert_eq!(progress.best_score, 85);
    assert_eq!(progress.attempts, 2);

    Ok(())
}

/// Tests a retry after the stage is already cleared.
///
/// A worse retry must not lower the best score, clear the flag, or count as
/// another first clear.
///
/// Expected: first_clear false, best score and clear state retained
#[tokio::test]
async fn retry_after_clear_keeps_best_score() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stage_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
    let stage = factory::create_stage(db, class.id).await?;
    let student = factory::create_student(db).await?;

    let repo = StageProgressRepository::new(db);
    repo.record_submission(stage.id, student.id, 90, true).await?;

    let (progress, first_clear) = repo
        .record_submission(stage.id, student.id, 55, false)
        .await?;

    assert!(!first_clear);
    assert!(progress.cleared);
    assert_eq!(progress.best_score, 90);
    assert_eq!(progress.attempts, 2);

    Ok(())
}
