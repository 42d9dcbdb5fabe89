use super::*;
use test_utils::factory;

/// Tests adding gold and exp to an account.
///
/// Verifies that both balances increase atomically relative to the stored
/// values, not a stale snapshot.
///
/// Expected: Ok with both balances incremented
#[tokio::test]
async fn increments_gold_and_exp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::user::UserFactory::new(db)
        .gold(30)
        .exp(100)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.add_rewards(student.id, 20, 50).await?;

    let updated = repo.find_by_id(student.id).await?.unwrap();
    assert_eq!(updated.gold, 50);
    assert_eq!(updated.exp, 150);

    Ok(())
}

/// Tests that consecutive reward grants accumulate.
///
/// Expected: Ok with the sum of both grants
#[tokio::test]
async fn consecutive_rewards_accumulate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = UserRepository::new(db);
    repo.add_rewards(student.id, 10, 25).await?;
    repo.add_rewards(student.id, 5, 25).await?;

    let updated = repo.find_by_id(student.id).await?.unwrap();
    assert_eq!(updated.gold, 15);
    assert_eq!(updated.exp, 50);

    Ok(())
}
