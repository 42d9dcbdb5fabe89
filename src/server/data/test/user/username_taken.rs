use super::*;
use test_utils::factory;

/// Tests the username uniqueness check.
///
/// Expected: true for an existing username, false otherwise
#[tokio::test]
async fn reports_existing_usernames() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .username("taken_name")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_taken(&existing.username).await?);
    assert!(!repo.username_taken("free_name").await?);

    Ok(())
}
