use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        map::{
            CreateGameMapDto, CreateMapObjectDto, GameMapDto, MapObjectDto, UpdateGameMapDto,
            UpdateMapObjectDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::map::MapService,
        state::AppState,
    },
};

/// Tag for grouping map endpoints in OpenAPI documentation
pub static MAP_TAG: &str = "map";

/// Create a game map for a class.
///
/// # Access Control
/// - `Teacher` - Only the owning teacher can author maps
#[utoipa::path(
    post,
    path = "/api/classes/{class_id}/maps",
    tag = MAP_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    request_body = CreateGameMapDto,
    responses(
        (status = 201, description = "Successfully created map", body = GameMapDto),
        (status = 400, description = "Invalid map data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_map(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
    Json(payload): Json<CreateGameMapDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let map = MapService::new(&state.db)
        .create_map(&teacher, class_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(map)))
}

/// Get a class's maps with their objects.
///
/// Readable by the owning teacher and enrolled students.
#[utoipa::path(
    get,
    path = "/api/classes/{class_id}/maps",
    tag = MAP_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Maps in the class", body = Vec<GameMapDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maps(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher, Permission::Student])
        .await?;

    let maps = MapService::new(&state.db).get_maps(&user, class_id).await?;

    Ok((StatusCode::OK, Json(maps)))
}

/// Get one map with its objects.
#[utoipa::path(
    get,
    path = "/api/maps/{map_id}",
    tag = MAP_TAG,
    params(
        ("map_id" = i32, Path, description = "Map ID")
    ),
    responses(
        (status = 200, description = "The requested map", body = GameMapDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Map not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_map(
    State(state): State<AppState>,
    session: Session,
    Path(map_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher, Permission::Student])
        .await?;

    let map = MapService::new(&state.db).get_map(&user, map_id).await?;

    Ok((StatusCode::OK, Json(map)))
}

/// Update a map's name, size, and tileset.
///
/// Shrinking is refused while objects sit outside the new bounds.
#[utoipa::path(
    put,
    path = "/api/maps/{map_id}",
    tag = MAP_TAG,
    params(
        ("map_id" = i32, Path, description = "Map ID")
    ),
    request_body = UpdateGameMapDto,
    responses(
        (status = 200, description = "Successfully updated map", body = GameMapDto),
        (status = 400, description = "Invalid map data or stranded objects", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Map not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_map(
    State(state): State<AppState>,
    session: Session,
    Path(map_id): Path<i32>,
    Json(payload): Json<UpdateGameMapDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let map = MapService::new(&state.db)
        .update_map(&teacher, map_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(map)))
}

/// Delete a map and its objects.
#[utoipa::path(
    delete,
    path = "/api/maps/{map_id}",
    tag = MAP_TAG,
    params(
        ("map_id" = i32, Path, description = "Map ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted map"),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Map not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_map(
    State(state): State<AppState>,
    session: Session,
    Path(map_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    MapService::new(&state.db).delete_map(&teacher, map_id).await?;

    Ok(StatusCode::OK)
}

/// Place an object on a map.
///
/// The position must lie inside the map bounds and the payload, when present,
/// must be valid JSON.
#[utoipa::path(
    post,
    path = "/api/maps/{map_id}/objects",
    tag = MAP_TAG,
    params(
        ("map_id" = i32, Path, description = "Map ID")
    ),
    request_body = CreateMapObjectDto,
    responses(
        (status = 201, description = "Successfully placed object", body = MapObjectDto),
        (status = 400, description = "Invalid object data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Map not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_object(
    State(state): State<AppState>,
    session: Session,
    Path(map_id): Path<i32>,
    Json(payload): Json<CreateMapObjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let object = MapService::new(&state.db)
        .create_object(&teacher, map_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(object)))
}

/// Move or retype a map object.
#[utoipa::path(
    put,
    path = "/api/map-objects/{object_id}",
    tag = MAP_TAG,
    params(
        ("object_id" = i32, Path, description = "Map object ID")
    ),
    request_body = UpdateMapObjectDto,
    responses(
        (status = 200, description = "Successfully updated object", body = MapObjectDto),
        (status = 400, description = "Invalid object data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Object not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_object(
    State(state): State<AppState>,
    session: Session,
    Path(object_id): Path<i32>,
    Json(payload): Json<UpdateMapObjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let object = MapService::new(&state.db)
        .update_object(&teacher, object_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(object)))
}

/// Remove an object from its map.
#[utoipa::path(
    delete,
    path = "/api/map-objects/{object_id}",
    tag = MAP_TAG,
    params(
        ("object_id" = i32, Path, description = "Map object ID")
    ),
    responses(
        (status = 200, description = "Successfully removed object"),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Object not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_object(
    State(state): State<AppState>,
    session: Session,
    Path(object_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    MapService::new(&state.db)
        .delete_object(&teacher, object_id)
        .await?;

    Ok(StatusCode::OK)
}
