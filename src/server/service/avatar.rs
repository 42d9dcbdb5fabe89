//! Avatar service: the part catalogue, ownership, and the paper doll.
//!
//! Free parts equip directly. Priced parts must be bought first; the first
//! equip of an unowned priced part runs the same transactional gold debit as a
//! shop purchase and records ownership, so later equips are free.

use entity::avatar_part::AvatarSlot;
use sea_orm::{ActiveEnum, DatabaseConnection, TransactionTrait};

use crate::{
    model::avatar::{
        AvatarDto, AvatarPartDto, CreateAvatarPartDto, EquipDto, UnequipDto, UpdateAvatarPartDto,
    },
    server::{
        data::{
            avatar_equipment::AvatarEquipmentRepository,
            avatar_ownership::AvatarOwnershipRepository, avatar_part::AvatarPartRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            avatar::{CreateAvatarPartParam, UpdateAvatarPartParam},
            user::User,
        },
        service::daily_task::flatten_transaction_error,
    },
};

pub struct AvatarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvatarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_part(&self, dto: CreateAvatarPartDto) -> Result<AvatarPartDto, AppError> {
        let repo = AvatarPartRepository::new(self.db);

        let slot = parse_slot(&dto.slot)?;
        validate_part(&dto.name, dto.price)?;

        let part = repo
            .create(CreateAvatarPartParam {
                slot,
                name: dto.name.trim().to_string(),
                sprite_key: dto.sprite_key,
                layer: dto.layer,
                price: dto.price,
            })
            .await?;

        Ok(part.into_dto())
    }

    /// The full part catalogue, ordered by draw layer.
    pub async fn get_parts(&self) -> Result<Vec<AvatarPartDto>, AppError> {
        let repo = AvatarPartRepository::new(self.db);

        let parts = repo.get_all().await?;

        Ok(parts.into_iter().map(|part| part.into_dto()).collect())
    }

    pub async fn update_part(
        &self,
        id: i32,
        dto: UpdateAvatarPartDto,
    ) -> Result<AvatarPartDto, AppError> {
        let repo = AvatarPartRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Avatar part not found".to_string()));
        }

        validate_part(&dto.name, dto.price)?;

        let part = repo
            .update(
                id,
                UpdateAvatarPartParam {
                    name: dto.name.trim().to_string(),
                    sprite_key: dto.sprite_key,
                    layer: dto.layer,
                    price: dto.price,
                },
            )
            .await?;

        Ok(part.into_dto())
    }

    pub async fn delete_part(&self, id: i32) -> Result<(), AppError> {
        let repo = AvatarPartRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Avatar part not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Equips a part into its slot, buying it first if it is priced and not
    /// yet owned. Replaces whatever the slot held.
    pub async fn equip(&self, student: &User, dto: EquipDto) -> Result<AvatarDto, AppError> {
        let part_repo = AvatarPartRepository::new(self.db);

        let slot = parse_slot(&dto.slot)?;

        let Some(part) = part_repo.get_by_id(dto.part_id).await? else {
            return Err(AppError::NotFound("Avatar part not found".to_string()));
        };

        if part.slot != slot {
            return Err(AppError::BadRequest(
                "Part does not fit the requested slot".to_string(),
            ));
        }

        let student_id = student.id;
        let part_id = part.id;
        let price = part.price;

        self.db
            .transaction::<_, (), AppError>(move |txn| {
                Box::pin(async move {
                    let ownership_repo = AvatarOwnershipRepository::new(txn);
                    let equipment_repo = AvatarEquipmentRepository::new(txn);
                    let user_repo = UserRepository::new(txn);

                    if price > 0 && !ownership_repo.owns(student_id, part_id).await? {
                        let Some(buyer) = user_repo.find_by_id(student_id).await? else {
                            return Err(AppError::NotFound("Student not found".to_string()));
                        };

                        if buyer.gold < price {
                            return Err(AppError::BadRequest("Insufficient gold".to_string()));
                        }

                        user_repo.set_gold(student_id, buyer.gold - price).await?;
                        ownership_repo.grant(student_id, part_id).await?;
                    }

                    equipment_repo.equip(student_id, slot, part_id).await?;

                    Ok(())
                })
            })
            .await
            .map_err(flatten_transaction_error)?;

        self.get_avatar(student).await
    }

    /// Clears a slot; clearing an empty slot succeeds.
    pub async fn unequip(&self, student: &User, dto: UnequipDto) -> Result<AvatarDto, AppError> {
        let repo = AvatarEquipmentRepository::new(self.db);

        let slot = parse_slot(&dto.slot)?;
        repo.unequip(student.id, slot).await?;

        self.get_avatar(student).await
    }

    /// The student's current equipment ordered by layer for compositing.
    pub async fn get_avatar(&self, student: &User) -> Result<AvatarDto, AppError> {
        let repo = AvatarEquipmentRepository::new(self.db);

        let mut parts = repo.get_equipped(student.id).await?;
        parts.sort_by_key(|part| (part.layer, part.id));

        Ok(AvatarDto {
            parts: parts.into_iter().map(|part| part.into_dto()).collect(),
        })
    }
}

fn parse_slot(slot: &str) -> Result<AvatarSlot, AppError> {
    AvatarSlot::try_from_value(&slot.to_string())
        .map_err(|_| AppError::BadRequest("Unknown avatar slot".to_string()))
}

fn validate_part(name: &str, price: i32) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Part name is required".to_string()));
    }

    if price < 0 {
        return Err(AppError::BadRequest(
            "Part price must not be negative".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_slots() {
        assert_eq!(parse_slot("body").unwrap(), AvatarSlot::Body);
        assert_eq!(parse_slot("hat").unwrap(), AvatarSlot::Hat);
        assert!(parse_slot("wings").is_err());
    }
}
