use super::*;

/// Tests reading a class roster.
///
/// Expected: enrolled students with balances, ordered by display name
#[tokio::test]
async fn returns_students_ordered_by_display_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_teacher(db).await?;

    let zoe = factory::user::UserFactory::new(db)
        .display_name("Zoe")
        .gold(15)
        .build()
        .await?;
    let amy = factory::user::UserFactory::new(db)
        .display_name("Amy")
        .exp(120)
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    repo.add_student(class.id, zoe.id).await?;
    repo.add_student(class.id, amy.id).await?;

    let roster = repo.get_roster(class.id).await?;

    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].display_name, "Amy");
    assert_eq!(roster[0].exp, 120);
    assert_eq!(roster[1].display_name, "Zoe");
    assert_eq!(roster[1].gold, 15);

    Ok(())
}

/// Tests the roster of a class with no students.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_class_has_empty_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_teacher(db).await?;

    let repo = ClassRepository::new(db);
    let roster = repo.get_roster(class.id).await?;

    assert!(roster.is_empty());

    Ok(())
}
