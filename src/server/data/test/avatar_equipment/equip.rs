use super::*;

/// Tests equipping a part into an empty slot.
///
/// Expected: the part shows up in the student's equipment
#[tokio::test]
async fn equips_part_into_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_avatar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let part = factory::create_part(db).await?;

    let repo = AvatarEquipmentRepository::new(db);
    repo.equip(student.id, AvatarSlot::Body, part.id).await?;

    let equipped = repo.get_equipped(student.id).await?;

    assert_eq!(equipped.len(), 1);
    assert_eq!(equipped[0].id, part.id);

    Ok(())
}

/// Tests equipping into an occupied slot.
///
/// One part per slot: the second equip must replace the first, not add a
/// second row.
///
/// Expected: only the newer part remains in the slot
#[tokio::test]
async fn equip_replaces_slot_occupant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_avatar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let first = factory::create_part(db).await?;
    let second = factory::create_part(db).await?;

    let repo = AvatarEquipmentRepository::new(db);
    repo.equip(student.id, AvatarSlot::Body, first.id).await?;
    repo.equip(student.id, AvatarSlot::Body, second.id).await?;

    let equipped = repo.get_equipped(student.id).await?;

    assert_eq!(equipped.len(), 1);
    assert_eq!(equipped[0].id, second.id);

    Ok(())
}

/// Tests that different slots hold parts independently.
///
/// Expected: one part per occupied slot
#[tokio::test]
async fn slots_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_avatar_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let body = factory::create_part(db).await?;
    let hat = factory::avatar_part::AvatarPartFactory::new(db)
        .slot(AvatarSlot::Hat)
        .build()
        .await?;

    let repo = AvatarEquipmentRepository::new(db);
    repo.equip(student.id, AvatarSlot::Body, body.id).await?;
    repo.equip(student.id, AvatarSlot::Hat, hat.id).await?;

    let equipped = repo.get_equipped(student.id).await?;

    assert_eq!(equipped.len(), 2);

    Ok(())
}
