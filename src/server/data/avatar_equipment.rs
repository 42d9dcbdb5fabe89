//! Avatar equipment data repository.
//!
//! Equipment is one part per (student, slot). Equipping into an occupied slot
//! replaces the previous part via upsert on the pair's unique index.

use crate::server::model::avatar::AvatarPart;
use entity::avatar_part::AvatarSlot;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct AvatarEquipmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvatarEquipmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Equips a part into a slot, replacing whatever was there.
    pub async fn equip(&self, student_id: i32, slot: AvatarSlot, part_id: i32) -> Result<(), DbErr> {
        entity::prelude::AvatarEquipment::insert(entity::avatar_equipment::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            slot: ActiveValue::Set(slot),
            part_id: ActiveValue::Set(part_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::avatar_equipment::Column::StudentId,
                entity::avatar_equipment::Column::Slot,
            ])
            .update_column(entity::avatar_equipment::Column::PartId)
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Clears a slot. Unequipping an empty slot is a no-op.
    pub async fn unequip(&self, student_id: i32, slot: AvatarSlot) -> Result<(), DbErr> {
        entity::prelude::AvatarEquipment::delete_many()
            .filter(entity::avatar_equipment::Column::StudentId.eq(student_id))
            .filter(entity::avatar_equipment::Column::Slot.eq(slot))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets a student's equipped parts.
    pub async fn get_equipped(&self, student_id: i32) -> Result<Vec<AvatarPart>, DbErr> {
        let rows = entity::prelude::AvatarEquipment::find()
            .filter(entity::avatar_equipment::Column::StudentId.eq(student_id))
            .find_also_related(entity::prelude::AvatarPart)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, part)| part.map(AvatarPart::from_entity))
            .collect())
    }
}
