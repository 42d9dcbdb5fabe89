use super::*;

/// Tests creating a class.
///
/// Expected: Ok with the join code stored and the class open
#[tokio::test]
async fn creates_open_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;

    let repo = ClassRepository::new(db);
    let class = repo
        .create(CreateClassParam {
            name: "Grade 3 Math".to_string(),
            join_code: "ABC123".to_string(),
            teacher_id: teacher.id,
        })
        .await?;

    assert_eq!(class.name, "Grade 3 Math");
    assert_eq!(class.join_code, "ABC123");
    assert_eq!(class.teacher_id, teacher.id);
    assert!(!class.archived);

    Ok(())
}

/// Tests listing a teacher's classes.
///
/// Expected: only classes owned by the queried teacher, sorted by name
#[tokio::test]
async fn lists_only_own_classes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let other = factory::create_teacher(db).await?;

    factory::class::ClassFactory::new(db, teacher.id)
        .name("Beta")
        .build()
        .await?;
    factory::class::ClassFactory::new(db, teacher.id)
        .name("Alpha")
        .build()
        .await?;
    factory::create_class(db, other.id).await?;

    let repo = ClassRepository::new(db);
    let classes = repo.get_by_teacher(teacher.id).await?;

    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0].name, "Alpha");
    assert_eq!(classes[1].name, "Beta");

    Ok(())
}
