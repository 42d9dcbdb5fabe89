use crate::server::model::map::{CreateGameMapParam, GameMap, UpdateGameMapParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct GameMapRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameMapRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateGameMapParam) -> Result<GameMap, DbErr> {
        let entity = entity::game_map::ActiveModel {
            class_id: ActiveValue::Set(param.class_id),
            name: ActiveValue::Set(param.name),
            width: ActiveValue::Set(param.width),
            height: ActiveValue::Set(param.height),
            tileset_key: ActiveValue::Set(param.tileset_key),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GameMap::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<GameMap>, DbErr> {
        let entity = entity::prelude::GameMap::find_by_id(id).one(self.db).await?;

        Ok(entity.map(GameMap::from_entity))
    }

    pub async fn get_by_class(&self, class_id: i32) -> Result<Vec<GameMap>, DbErr> {
        let entities = entity::prelude::GameMap::find()
            .filter(entity::game_map::Column::ClassId.eq(class_id))
            .order_by_asc(entity::game_map::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GameMap::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: UpdateGameMapParam) -> Result<GameMap, DbErr> {
        let map = entity::prelude::GameMap::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Map with id {} not found",
                id
            )))?;

        let mut active_model: entity::game_map::ActiveModel = map.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.width = ActiveValue::Set(param.width);
        active_model.height = ActiveValue::Set(param.height);
        active_model.tileset_key = ActiveValue::Set(param.tileset_key);

        let entity = active_model.update(self.db).await?;

        Ok(GameMap::from_entity(entity))
    }

    /// Deletes a map and its placed objects.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::MapObject::delete_many()
            .filter(entity::map_object::Column::MapId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::GameMap::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
