use super::*;

/// Tests reading a student's inventory with item details joined.
///
/// Expected: one entry per owned item with the catalogue fields attached
#[tokio::test]
async fn joins_item_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let potion = factory::item::ItemFactory::new(db)
        .name("Potion")
        .price(25)
        .build()
        .await?;

    let repo = PlayerItemRepository::new(db);
    repo.add_item(student.id, potion.id).await?;

    let inventory = repo.get_inventory(student.id).await?;

    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory[0].item.name, "Potion");
    assert_eq!(inventory[0].item.price, 25);
    assert_eq!(inventory[0].quantity, 1);

    Ok(())
}

/// Tests the inventory of a student who owns nothing.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_inventory_for_new_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = PlayerItemRepository::new(db);
    let inventory = repo.get_inventory(student.id).await?;

    assert!(inventory.is_empty());

    Ok(())
}
