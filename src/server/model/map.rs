//! Game map and map object domain models and operation parameters.

use entity::map_object::MapObjectKind;
use sea_orm::ActiveEnum;

use crate::model::map::{GameMapDto, MapObjectDto};

#[derive(Debug, Clone, PartialEq)]
pub struct GameMap {
    pub id: i32,
    pub class_id: i32,
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub tileset_key: String,
}

impl GameMap {
    pub fn from_entity(entity: entity::game_map::Model) -> Self {
        Self {
            id: entity.id,
            class_id: entity.class_id,
            name: entity.name,
            width: entity.width,
            height: entity.height,
            tileset_key: entity.tileset_key,
        }
    }

    pub fn into_dto(self, objects: Vec<MapObject>) -> GameMapDto {
        GameMapDto {
            id: self.id,
            class_id: self.class_id,
            name: self.name,
            width: self.width,
            height: self.height,
            tileset_key: self.tileset_key,
            objects: objects.into_iter().map(MapObject::into_dto).collect(),
        }
    }

    /// True when the coordinate lies inside the map bounds.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }
}

pub struct CreateGameMapParam {
    pub class_id: i32,
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub tileset_key: String,
}

pub struct UpdateGameMapParam {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub tileset_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapObject {
    pub id: i32,
    pub map_id: i32,
    pub kind: MapObjectKind,
    pub x: i32,
    pub y: i32,
    pub payload: Option<String>,
}

impl MapObject {
    pub fn from_entity(entity: entity::map_object::Model) -> Self {
        Self {
            id: entity.id,
            map_id: entity.map_id,
            kind: entity.kind,
            x: entity.x,
            y: entity.y,
            payload: entity.payload,
        }
    }

    pub fn into_dto(self) -> MapObjectDto {
        MapObjectDto {
            id: self.id,
            kind: self.kind.to_value(),
            x: self.x,
            y: self.y,
            payload: self.payload,
        }
    }
}

pub struct CreateMapObjectParam {
    pub map_id: i32,
    pub kind: MapObjectKind,
    pub x: i32,
    pub y: i32,
    pub payload: Option<String>,
}

pub struct UpdateMapObjectParam {
    pub kind: MapObjectKind,
    pub x: i32,
    pub y: i32,
    pub payload: Option<String>,
}
