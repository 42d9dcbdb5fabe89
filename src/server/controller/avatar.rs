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
        avatar::{
            AvatarDto, AvatarPartDto, CreateAvatarPartDto, EquipDto, UnequipDto,
            UpdateAvatarPartDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::avatar::AvatarService,
        state::AppState,
    },
};

/// Tag for grouping avatar endpoints in OpenAPI documentation
pub static AVATAR_TAG: &str = "avatar";

/// Add a part to the avatar catalogue.
///
/// # Access Control
/// - `Teacher` - Only teachers can manage the catalogue
#[utoipa::path(
    post,
    path = "/api/avatar/parts",
    tag = AVATAR_TAG,
    request_body = CreateAvatarPartDto,
    responses(
        (status = 201, description = "Successfully created part", body = AvatarPartDto),
        (status = 400, description = "Invalid part data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_part(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAvatarPartDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let part = AvatarService::new(&state.db).create_part(payload).await?;

    Ok((StatusCode::CREATED, Json(part)))
}

/// Get the avatar part catalogue, ordered by draw layer.
#[utoipa::path(
    get,
    path = "/api/avatar/parts",
    tag = AVATAR_TAG,
    responses(
        (status = 200, description = "Catalogue parts", body = Vec<AvatarPartDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher, Permission::Student])
        .await?;

    let parts = AvatarService::new(&state.db).get_parts().await?;

    Ok((StatusCode::OK, Json(parts)))
}

/// Update an avatar part.
#[utoipa::path(
    put,
    path = "/api/avatar/parts/{part_id}",
    tag = AVATAR_TAG,
    params(
        ("part_id" = i32, Path, description = "Avatar part ID")
    ),
    request_body = UpdateAvatarPartDto,
    responses(
        (status = 200, description = "Successfully updated part", body = AvatarPartDto),
        (status = 400, description = "Invalid part data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Part not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_part(
    State(state): State<AppState>,
    session: Session,
    Path(part_id): Path<i32>,
    Json(payload): Json<UpdateAvatarPartDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let part = AvatarService::new(&state.db)
        .update_part(part_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(part)))
}

/// Delete an avatar part.
#[utoipa::path(
    delete,
    path = "/api/avatar/parts/{part_id}",
    tag = AVATAR_TAG,
    params(
        ("part_id" = i32, Path, description = "Avatar part ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted part"),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Part not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_part(
    State(state): State<AppState>,
    session: Session,
    Path(part_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    AvatarService::new(&state.db).delete_part(part_id).await?;

    Ok(StatusCode::OK)
}

/// Equip a part into a slot.
///
/// Priced parts are bought on first equip; the gold debit and ownership grant
/// commit together. Later equips of an owned part are free.
///
/// # Access Control
/// - `Student` - Only students have avatars
#[utoipa::path(
    post,
    path = "/api/avatar/equip",
    tag = AVATAR_TAG,
    request_body = EquipDto,
    responses(
        (status = 200, description = "Avatar after the change", body = AvatarDto),
        (status = 400, description = "Slot mismatch or insufficient gold", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a student", body = ErrorDto),
        (status = 404, description = "Part not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn equip(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<EquipDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let avatar = AvatarService::new(&state.db).equip(&student, payload).await?;

    Ok((StatusCode::OK, Json(avatar)))
}

/// Clear a slot on the caller's avatar.
#[utoipa::path(
    post,
    path = "/api/avatar/unequip",
    tag = AVATAR_TAG,
    request_body = UnequipDto,
    responses(
        (status = 200, description = "Avatar after the change", body = AvatarDto),
        (status = 400, description = "Unknown slot", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unequip(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UnequipDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let avatar = AvatarService::new(&state.db).unequip(&student, payload).await?;

    Ok((StatusCode::OK, Json(avatar)))
}

/// Get the caller's current avatar, parts in draw order.
#[utoipa::path(
    get,
    path = "/api/avatar",
    tag = AVATAR_TAG,
    responses(
        (status = 200, description = "Currently equipped parts", body = AvatarDto),
        (status = 401, description = "User not authenticated or not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_avatar(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let avatar = AvatarService::new(&state.db).get_avatar(&student).await?;

    Ok((StatusCode::OK, Json(avatar)))
}
