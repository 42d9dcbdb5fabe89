//! Avatar part ownership data repository.
//!
//! Priced parts must be bought once before they can be equipped; ownership
//! rows record the purchase. Free parts never get a row.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

pub struct AvatarOwnershipRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvatarOwnershipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records that a student owns a part. Granting twice is a no-op.
    pub async fn grant(&self, student_id: i32, part_id: i32) -> Result<(), DbErr> {
        entity::prelude::AvatarOwnership::insert(entity::avatar_ownership::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            part_id: ActiveValue::Set(part_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::avatar_ownership::Column::StudentId,
                entity::avatar_ownership::Column::PartId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn owns(&self, student_id: i32, part_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::AvatarOwnership::find()
            .filter(entity::avatar_ownership::Column::StudentId.eq(student_id))
            .filter(entity::avatar_ownership::Column::PartId.eq(part_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
