use crate::server::model::avatar::{AvatarPart, CreateAvatarPartParam, UpdateAvatarPartParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

pub struct AvatarPartRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvatarPartRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAvatarPartParam) -> Result<AvatarPart, DbErr> {
        let entity = entity::avatar_part::ActiveModel {
            slot: ActiveValue::Set(param.slot),
            name: ActiveValue::Set(param.name),
            sprite_key: ActiveValue::Set(param.sprite_key),
            layer: ActiveValue::Set(param.layer),
            price: ActiveValue::Set(param.price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AvatarPart::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AvatarPart>, DbErr> {
        let entity = entity::prelude::AvatarPart::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(AvatarPart::from_entity))
    }

    /// Gets all parts ordered by draw layer.
    pub async fn get_all(&self) -> Result<Vec<AvatarPart>, DbErr> {
        let entities = entity::prelude::AvatarPart::find()
            .order_by_asc(entity::avatar_part::Column::Layer)
            .order_by_asc(entity::avatar_part::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(AvatarPart::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: UpdateAvatarPartParam) -> Result<AvatarPart, DbErr> {
        let part = entity::prelude::AvatarPart::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Avatar part with id {} not found",
                id
            )))?;

        let mut active_model: entity::avatar_part::ActiveModel = part.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.sprite_key = ActiveValue::Set(param.sprite_key);
        active_model.layer = ActiveValue::Set(param.layer);
        active_model.price = ActiveValue::Set(param.price);

        let entity = active_model.update(self.db).await?;

        Ok(AvatarPart::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::AvatarPart::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
