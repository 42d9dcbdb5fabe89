use super::*;

/// Tests looking up login credentials by username.
///
/// Expected: Ok with the stored hash and salt
#[tokio::test]
async fn returns_stored_hash_and_salt() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParam {
        username: "sam".to_string(),
        password_hash: "expected-hash".to_string(),
        password_salt: "expected-salt".to_string(),
        display_name: "Sam".to_string(),
        role: UserRole::Student,
    })
    .await?;

    let credentials = repo.find_credentials("sam").await?;

    assert!(credentials.is_some());
    let credentials = credentials.unwrap();
    assert_eq!(credentials.password_hash, "expected-hash");
    assert_eq!(credentials.password_salt, "expected-salt");
    assert_eq!(credentials.user.username, "sam");

    Ok(())
}

/// Tests looking up credentials for an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials("nobody").await?;

    assert!(credentials.is_none());

    Ok(())
}
