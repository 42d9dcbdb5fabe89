use super::*;

/// Tests removing a student from a class.
///
/// The student account itself must survive; only the enrolment goes.
///
/// Expected: Ok with membership gone
#[tokio::test]
async fn removes_enrolment_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
    let student = factory::create_student(db).await?;

    let repo = ClassRepository::new(db);
    repo.add_student(class.id, student.id).await?;
    repo.remove_student(class.id, student.id).await?;

    assert!(!repo.is_member(class.id, student.id).await?);

    let account = crate::server::data::user::UserRepository::new(db)
        .find_by_id(student.id)
        .await?;
    assert!(account.is_some());

    Ok(())
}
