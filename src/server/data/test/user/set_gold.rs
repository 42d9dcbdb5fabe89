use super::*;
use test_utils::factory;

/// Tests overwriting an account's gold balance.
///
/// Expected: Ok with gold replaced and exp untouched
#[tokio::test]
async fn replaces_gold_without_touching_exp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::user::UserFactory::new(db)
        .gold(100)
        .exp(300)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.set_gold(student.id, 40).await?;

    let updated = repo.find_by_id(student.id).await?.unwrap();
    assert_eq!(updated.gold, 40);
    assert_eq!(updated.exp, 300);

    Ok(())
}
