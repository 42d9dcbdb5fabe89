use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameMapDto {
    pub id: i32,
    pub class_id: i32,
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub tileset_key: String,
    pub objects: Vec<MapObjectDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateGameMapDto {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub tileset_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateGameMapDto {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub tileset_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapObjectDto {
    pub id: i32,
    /// One of `obstacle`, `portal`, `npc`, `chest`.
    pub kind: String,
    pub x: i32,
    pub y: i32,
    /// Opaque JSON payload interpreted by the client (portal target, etc.).
    pub payload: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateMapObjectDto {
    pub kind: String,
    pub x: i32,
    pub y: i32,
    pub payload: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateMapObjectDto {
    pub kind: String,
    pub x: i32,
    pub y: i32,
    pub payload: Option<String>,
}
