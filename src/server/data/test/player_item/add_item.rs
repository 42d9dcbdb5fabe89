use super::*;

/// Tests granting an item the student does not own yet.
///
/// Expected: Ok(1)
#[tokio::test]
async fn first_copy_starts_at_one() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let item = factory::create_item(db).await?;

    let repo = PlayerItemRepository::new(db);
    let quantity = repo.add_item(student.id, item.id).await?;

    assert_eq!(quantity, 1);

    Ok(())
}

/// Tests granting further copies of an owned item.
///
/// Repeat purchases must stack on the existing row instead of inserting
/// duplicates.
///
/// Expected: quantity climbing 1, 2, 3
#[tokio::test]
async fn repeat_copies_stack() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let item = factory::create_item(db).await?;

    let repo = PlayerItemRepository::new(db);
    repo.add_item(student.id, item.id).await?;
    repo.add_item(student.id, item.id).await?;
    let quantity = repo.add_item(student.id, item.id).await?;

    assert_eq!(quantity, 3);

    let inventory = repo.get_inventory(student.id).await?;
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory[0].quantity, 3);

    Ok(())
}
