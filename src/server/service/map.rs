//! Map service: class game maps and the objects placed on them.
//!
//! Maps are bounded grids (1-200 per side). Objects must sit inside the
//! bounds, and their payload, when present, must parse as JSON since the
//! client deserializes it blindly.

use entity::map_object::MapObjectKind;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::map::{
        CreateGameMapDto, CreateMapObjectDto, GameMapDto, MapObjectDto, UpdateGameMapDto,
        UpdateMapObjectDto,
    },
    server::{
        data::{class::ClassRepository, game_map::GameMapRepository, map_object::MapObjectRepository},
        error::AppError,
        model::{
            map::{
                CreateGameMapParam, CreateMapObjectParam, GameMap, UpdateGameMapParam,
                UpdateMapObjectParam,
            },
            user::User,
        },
    },
};

/// Largest allowed map side length in tiles.
const MAX_MAP_SIDE: i32 = 200;

pub struct MapService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MapService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_map(
        &self,
        teacher: &User,
        class_id: i32,
        dto: CreateGameMapDto,
    ) -> Result<GameMapDto, AppError> {
        let repo = GameMapRepository::new(self.db);

        self.owned_class(teacher, class_id).await?;
        validate_bounds(dto.width, dto.height)?;

        let map = repo
            .create(CreateGameMapParam {
                class_id,
                name: dto.name,
                width: dto.width,
                height: dto.height,
                tileset_key: dto.tileset_key,
            })
            .await?;

        Ok(map.into_dto(Vec::new()))
    }

    pub async fn get_maps(&self, user: &User, class_id: i32) -> Result<Vec<GameMapDto>, AppError> {
        let map_repo = GameMapRepository::new(self.db);
        let object_repo = MapObjectRepository::new(self.db);

        self.require_access(user, class_id).await?;

        let maps = map_repo.get_by_class(class_id).await?;
        let mut dtos = Vec::with_capacity(maps.len());
        for map in maps {
            let objects = object_repo.get_by_map(map.id).await?;
            dtos.push(map.into_dto(objects));
        }

        Ok(dtos)
    }

    pub async fn get_map(&self, user: &User, map_id: i32) -> Result<GameMapDto, AppError> {
        let object_repo = MapObjectRepository::new(self.db);

        let map = self.accessible_map(user, map_id).await?;
        let objects = object_repo.get_by_map(map.id).await?;

        Ok(map.into_dto(objects))
    }

    pub async fn update_map(
        &self,
        teacher: &User,
        map_id: i32,
        dto: UpdateGameMapDto,
    ) -> Result<GameMapDto, AppError> {
        let repo = GameMapRepository::new(self.db);
        let object_repo = MapObjectRepository::new(self.db);

        let map = self.owned_map(teacher, map_id).await?;
        validate_bounds(dto.width, dto.height)?;

        // Shrinking the map must not strand objects outside the new bounds.
        let objects = object_repo.get_by_map(map.id).await?;
        if objects
            .iter()
            .any(|object| object.x >= dto.width || object.y >= dto.height)
        {
            return Err(AppError::BadRequest(
                "Map cannot shrink below its placed objects".to_string(),
            ));
        }

        let map = repo
            .update(
                map_id,
                UpdateGameMapParam {
                    name: dto.name,
                    width: dto.width,
                    height: dto.height,
                    tileset_key: dto.tileset_key,
                },
            )
            .await?;

        Ok(map.into_dto(objects))
    }

    pub async fn delete_map(&self, teacher: &User, map_id: i32) -> Result<(), AppError> {
        let repo = GameMapRepository::new(self.db);

        self.owned_map(teacher, map_id).await?;
        repo.delete(map_id).await?;

        Ok(())
    }

    pub async fn create_object(
        &self,
        teacher: &User,
        map_id: i32,
        dto: CreateMapObjectDto,
    ) -> Result<MapObjectDto, AppError> {
        let repo = MapObjectRepository::new(self.db);

        let map = self.owned_map(teacher, map_id).await?;
        let kind = parse_kind(&dto.kind)?;
        validate_placement(&map, dto.x, dto.y)?;
        validate_payload(dto.payload.as_deref())?;

        let object = repo
            .create(CreateMapObjectParam {
                map_id,
                kind,
                x: dto.x,
                y: dto.y,
                payload: dto.payload,
            })
            .await?;

        Ok(object.into_dto())
    }

    pub async fn update_object(
        &self,
        teacher: &User,
        object_id: i32,
        dto: UpdateMapObjectDto,
    ) -> Result<MapObjectDto, AppError> {
        let repo = MapObjectRepository::new(self.db);

        let Some(object) = repo.get_by_id(object_id).await? else {
            return Err(AppError::NotFound("Map object not found".to_string()));
        };

        let map = self.owned_map(teacher, object.map_id).await?;
        let kind = parse_kind(&dto.kind)?;
        validate_placement(&map, dto.x, dto.y)?;
        validate_payload(dto.payload.as_deref())?;

        let object = repo
            .update(
                object_id,
                UpdateMapObjectParam {
                    kind,
                    x: dto.x,
                    y: dto.y,
                    payload: dto.payload,
                },
            )
            .await?;

        Ok(object.into_dto())
    }

    pub async fn delete_object(&self, teacher: &User, object_id: i32) -> Result<(), AppError> {
        let repo = MapObjectRepository::new(self.db);

        let Some(object) = repo.get_by_id(object_id).await? else {
            return Err(AppError::NotFound("Map object not found".to_string()));
        };

        self.owned_map(teacher, object.map_id).await?;
        repo.delete(object_id).await?;

        Ok(())
    }

    async fn owned_class(&self, teacher: &User, class_id: i32) -> Result<(), AppError> {
        let class_repo = ClassRepository::new(self.db);

        let Some(class) = class_repo.get_by_id(class_id).await? else {
            return Err(AppError::NotFound("Class not found".to_string()));
        };

        if class.teacher_id != teacher.id {
            return Err(AppError::NotFound("Class not found".to_string()));
        }

        Ok(())
    }

    /// Reads are open to the owning teacher and enrolled students.
    async fn require_access(&self, user: &User, class_id: i32) -> Result<(), AppError> {
        let class_repo = ClassRepository::new(self.db);

        let Some(class) = class_repo.get_by_id(class_id).await? else {
            return Err(AppError::NotFound("Class not found".to_string()));
        };

        if class.teacher_id == user.id || class_repo.is_member(class_id, user.id).await? {
            return Ok(());
        }

        Err(AppError::NotFound("Class not found".to_string()))
    }

    async fn owned_map(&self, teacher: &User, map_id: i32) -> Result<GameMap, AppError> {
        let repo = GameMapRepository::new(self.db);

        let Some(map) = repo.get_by_id(map_id).await? else {
            return Err(AppError::NotFound("Map not found".to_string()));
        };

        self.owned_class(teacher, map.class_id).await?;

        Ok(map)
    }

    async fn accessible_map(&self, user: &User, map_id: i32) -> Result<GameMap, AppError> {
        let repo = GameMapRepository::new(self.db);

        let Some(map) = repo.get_by_id(map_id).await? else {
            return Err(AppError::NotFound("Map not found".to_string()));
        };

        self.require_access(user, map.class_id).await?;

        Ok(map)
    }
}

fn parse_kind(kind: &str) -> Result<MapObjectKind, AppError> {
    MapObjectKind::try_from_value(&kind.to_string())
        .map_err(|_| AppError::BadRequest("Unknown object kind".to_string()))
}

fn validate_bounds(width: i32, height: i32) -> Result<(), AppError> {
    if !(1..=MAX_MAP_SIDE).contains(&width) || !(1..=MAX_MAP_SIDE).contains(&height) {
        return Err(AppError::BadRequest(format!(
            "Map sides must be between 1 and {} tiles",
            MAX_MAP_SIDE
        )));
    }

    Ok(())
}

fn validate_placement(map: &GameMap, x: i32, y: i32) -> Result<(), AppError> {
    if !map.contains(x, y) {
        return Err(AppError::BadRequest(
            "Object lies outside the map bounds".to_string(),
        ));
    }

    Ok(())
}

fn validate_payload(payload: Option<&str>) -> Result<(), AppError> {
    if let Some(payload) = payload {
        serde_json::from_str::<serde_json::Value>(payload)
            .map_err(|_| AppError::BadRequest("Payload is not valid JSON".to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_bounds() {
        assert!(validate_bounds(0, 10).is_err());
        assert!(validate_bounds(10, 201).is_err());
        assert!(validate_bounds(1, 1).is_ok());
        assert!(validate_bounds(200, 200).is_ok());
    }

    #[test]
    fn rejects_placement_outside_bounds() {
        let map = GameMap {
            id: 1,
            class_id: 1,
            name: "Meadow".to_string(),
            width: 10,
            height: 8,
            tileset_key: "meadow".to_string(),
        };

        assert!(validate_placement(&map, 10, 0).is_err());
        assert!(validate_placement(&map, 0, 8).is_err());
        assert!(validate_placement(&map, -1, 0).is_err());
        assert!(validate_placement(&map, 9, 7).is_ok());
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(validate_payload(Some("{not json")).is_err());
        assert!(validate_payload(Some(r#"{"target_map": 3}"#)).is_ok());
        assert!(validate_payload(None).is_ok());
    }
}
