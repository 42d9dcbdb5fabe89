use crate::server::model::map::{CreateMapObjectParam, MapObject, UpdateMapObjectParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct MapObjectRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MapObjectRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateMapObjectParam) -> Result<MapObject, DbErr> {
        let entity = entity::map_object::ActiveModel {
            map_id: ActiveValue::Set(param.map_id),
            kind: ActiveValue::Set(param.kind),
            x: ActiveValue::Set(param.x),
            y: ActiveValue::Set(param.y),
            payload: ActiveValue::Set(param.payload),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MapObject::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MapObject>, DbErr> {
        let entity = entity::prelude::MapObject::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MapObject::from_entity))
    }

    pub async fn get_by_map(&self, map_id: i32) -> Result<Vec<MapObject>, DbErr> {
        let entities = entity::prelude::MapObject::find()
            .filter(entity::map_object::Column::MapId.eq(map_id))
            .order_by_asc(entity::map_object::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MapObject::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: UpdateMapObjectParam) -> Result<MapObject, DbErr> {
        let object = entity::prelude::MapObject::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Map object with id {} not found",
                id
            )))?;

        let mut active_model: entity::map_object::ActiveModel = object.into();
        active_model.kind = ActiveValue::Set(param.kind);
        active_model.x = ActiveValue::Set(param.x);
        active_model.y = ActiveValue::Set(param.y);
        active_model.payload = ActiveValue::Set(param.payload);

        let entity = active_model.update(self.db).await?;

        Ok(MapObject::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::MapObject::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
