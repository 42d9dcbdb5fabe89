use super::*;

/// Tests enrolling a student in a class.
///
/// Expected: Ok with the student reported as a member
#[tokio::test]
async fn enrols_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
    let student = factory::create_student(db).await?;

    let repo = ClassRepository::new(db);
    repo.add_student(class.id, student.id).await?;

    assert!(repo.is_member(class.id, student.id).await?);

    Ok(())
}

/// Tests enrolling the same student twice.
///
/// The insert uses ON CONFLICT DO NOTHING on the (class, student) pair, so a
/// repeat join must not fail or duplicate the enrolment.
///
/// Expected: Ok both times, one roster entry
#[tokio::test]
async fn repeat_enrolment_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
    let student = factory::create_student(db).await?;

    let repo = ClassRepository::new(db);
    repo.add_student(class.id, student.id).await?;
    repo.add_student(class.id, student.id).await?;

    let roster = repo.get_roster(class.id).await?;
    assert_eq!(roster.len(), 1);

    Ok(())
}
