use super::*;

/// Tests replacing a class join code.
///
/// Expected: Ok with the old code dead and the new one live
#[tokio::test]
async fn replaces_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let class = factory::class::ClassFactory::new(db, teacher.id)
        .join_code("OLD001")
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    let updated = repo.set_join_code(class.id, "NEW002").await?;

    assert_eq!(updated.join_code, "NEW002");
    assert!(repo.find_by_join_code("OLD001").await?.is_none());
    assert!(repo.find_by_join_code("NEW002").await?.is_some());

    Ok(())
}
