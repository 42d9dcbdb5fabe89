use super::*;
use test_utils::factory;

/// Tests the seed check used at startup.
///
/// Expected: false with only students present, true once a teacher exists
#[tokio::test]
async fn ignores_student_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    factory::create_student(db).await?;
    assert!(!repo.teacher_exists().await?);

    factory::create_teacher(db).await?;
    assert!(repo.teacher_exists().await?);

    Ok(())
}
