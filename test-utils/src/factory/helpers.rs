//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique test
/// identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a teacher together with a class they own.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((teacher, class))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_class_with_teacher(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::class::Model), DbErr> {
    let teacher = crate::factory::user::create_teacher(db).await?;
    let class = crate::factory::class::create_class(db, teacher.id).await?;

    Ok((teacher, class))
}

/// Creates a unit together with its parent subject.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((subject, unit))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_unit_with_subject(
    db: &DatabaseConnection,
) -> Result<(entity::subject::Model, entity::unit::Model), DbErr> {
    let subject = crate::factory::subject::create_subject(db).await?;
    let unit = crate::factory::unit::create_unit(db, subject.id).await?;

    Ok((subject, unit))
}
