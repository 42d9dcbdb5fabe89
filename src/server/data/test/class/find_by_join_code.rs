use super::*;

/// Tests looking up a class by its join code.
///
/// Expected: Ok(Some) for a live code, Ok(None) for an unknown one
#[tokio::test]
async fn finds_class_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let class = factory::class::ClassFactory::new(db, teacher.id)
        .join_code("XYZ789")
        .build()
        .await?;

    let repo = ClassRepository::new(db);

    let found = repo.find_by_join_code("XYZ789").await?;
    assert_eq!(found.map(|c| c.id), Some(class.id));

    let missing = repo.find_by_join_code("NOPE00").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the join code uniqueness check used during generation.
///
/// Expected: true for a live code, false otherwise
#[tokio::test]
async fn reports_taken_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    factory::class::ClassFactory::new(db, teacher.id)
        .join_code("TAKEN1")
        .build()
        .await?;

    let repo = ClassRepository::new(db);

    assert!(repo.join_code_taken("TAKEN1").await?);
    assert!(!repo.join_code_taken("FREE01").await?);

    Ok(())
}
