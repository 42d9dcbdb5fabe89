use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        announcement::{
            AnnouncementDto, CreateAnnouncementDto, PaginatedAnnouncementsDto,
            UpdateAnnouncementDto,
        },
        api::ErrorDto,
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::announcement::AnnouncementService,
        state::AppState,
    },
};

/// Tag for grouping announcement endpoints in OpenAPI documentation
pub static ANNOUNCEMENT_TAG: &str = "announcement";

/// Post an announcement to a class.
///
/// # Access Control
/// - `Teacher` - Only the owning teacher can post
#[utoipa::path(
    post,
    path = "/api/classes/{class_id}/announcements",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    request_body = CreateAnnouncementDto,
    responses(
        (status = 201, description = "Successfully posted announcement", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
    Json(payload): Json<CreateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let announcement = AnnouncementService::new(&state.db)
        .create(&teacher, class_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(announcement)))
}

/// Get a class's announcements, pinned posts first.
///
/// Readable by the owning teacher and enrolled students.
#[utoipa::path(
    get,
    path = "/api/classes/{class_id}/announcements",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated announcements", body = PaginatedAnnouncementsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcements(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher, Permission::Student])
        .await?;

    let announcements = AnnouncementService::new(&state.db)
        .get_by_class_paginated(&user, class_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(announcements)))
}

/// Edit an announcement.
#[utoipa::path(
    put,
    path = "/api/announcements/{announcement_id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("announcement_id" = i32, Path, description = "Announcement ID")
    ),
    request_body = UpdateAnnouncementDto,
    responses(
        (status = 200, description = "Successfully updated announcement", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(announcement_id): Path<i32>,
    Json(payload): Json<UpdateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let announcement = AnnouncementService::new(&state.db)
        .update(&teacher, announcement_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(announcement)))
}

/// Delete an announcement.
#[utoipa::path(
    delete,
    path = "/api/announcements/{announcement_id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("announcement_id" = i32, Path, description = "Announcement ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted announcement"),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(announcement_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    AnnouncementService::new(&state.db)
        .delete(&teacher, announcement_id)
        .await?;

    Ok(StatusCode::OK)
}
