use super::*;

/// Tests creating a new account.
///
/// Verifies that the user repository stores the credentials and profile
/// fields and starts the account with empty balances.
///
/// Expected: Ok with zero gold and exp
#[tokio::test]
async fn creates_account_with_empty_balances() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "ms_frizzle".to_string(),
            password_hash: "hash".to_string(),
            password_salt: "salt".to_string(),
            display_name: "Ms. Frizzle".to_string(),
            role: UserRole::Teacher,
        })
        .await?;

    assert_eq!(user.username, "ms_frizzle");
    assert_eq!(user.display_name, "Ms. Frizzle");
    assert_eq!(user.role, UserRole::Teacher);
    assert_eq!(user.gold, 0);
    assert_eq!(user.exp, 0);

    Ok(())
}

/// Tests that a created account can be read back by id.
///
/// Expected: Ok with the same profile fields
#[tokio::test]
async fn created_account_is_findable_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParam {
            username: "sam".to_string(),
            password_hash: "hash".to_string(),
            password_salt: "salt".to_string(),
            display_name: "Sam".to_string(),
            role: UserRole::Student,
        })
        .await?;

    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.username, "sam");
    assert_eq!(found.role, UserRole::Student);

    Ok(())
}
