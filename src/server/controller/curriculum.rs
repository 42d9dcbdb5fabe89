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
        curriculum::{
            CreateSubjectDto, CreateUnitDto, SubjectDto, UnitDto, UpdateSubjectDto, UpdateUnitDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::curriculum::CurriculumService,
        state::AppState,
    },
};

/// Tag for grouping curriculum endpoints in OpenAPI documentation
pub static CURRICULUM_TAG: &str = "curriculum";

/// Create a subject.
///
/// # Access Control
/// - `Teacher` - Only teachers can manage the curriculum
#[utoipa::path(
    post,
    path = "/api/subjects",
    tag = CURRICULUM_TAG,
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Successfully created subject", body = SubjectDto),
        (status = 400, description = "Invalid subject data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subject(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let subject = CurriculumService::new(&state.db).create_subject(payload).await?;

    Ok((StatusCode::CREATED, Json(subject)))
}

/// Get all subjects in display order.
#[utoipa::path(
    get,
    path = "/api/subjects",
    tag = CURRICULUM_TAG,
    responses(
        (status = 200, description = "All subjects", body = Vec<SubjectDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher, Permission::Student])
        .await?;

    let subjects = CurriculumService::new(&state.db).get_subjects().await?;

    Ok((StatusCode::OK, Json(subjects)))
}

/// Update a subject's name and ordering.
#[utoipa::path(
    put,
    path = "/api/subjects/{subject_id}",
    tag = CURRICULUM_TAG,
    params(
        ("subject_id" = i32, Path, description = "Subject ID")
    ),
    request_body = UpdateSubjectDto,
    responses(
        (status = 200, description = "Successfully updated subject", body = SubjectDto),
        (status = 400, description = "Invalid subject data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_subject(
    State(state): State<AppState>,
    session: Session,
    Path(subject_id): Path<i32>,
    Json(payload): Json<UpdateSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let subject = CurriculumService::new(&state.db)
        .update_subject(subject_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(subject)))
}

/// Delete a subject.
///
/// Refused while the subject still has units.
#[utoipa::path(
    delete,
    path = "/api/subjects/{subject_id}",
    tag = CURRICULUM_TAG,
    params(
        ("subject_id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted subject"),
        (status = 400, description = "Subject still has units", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    session: Session,
    Path(subject_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    CurriculumService::new(&state.db).delete_subject(subject_id).await?;

    Ok(StatusCode::OK)
}

/// Create a unit under a subject.
#[utoipa::path(
    post,
    path = "/api/units",
    tag = CURRICULUM_TAG,
    request_body = CreateUnitDto,
    responses(
        (status = 201, description = "Successfully created unit", body = UnitDto),
        (status = 400, description = "Invalid unit data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_unit(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUnitDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let unit = CurriculumService::new(&state.db).create_unit(payload).await?;

    Ok((StatusCode::CREATED, Json(unit)))
}

/// Get a subject's units in display order.
#[utoipa::path(
    get,
    path = "/api/subjects/{subject_id}/units",
    tag = CURRICULUM_TAG,
    params(
        ("subject_id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Units under the subject", body = Vec<UnitDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_units(
    State(state): State<AppState>,
    session: Session,
    Path(subject_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher, Permission::Student])
        .await?;

    let units = CurriculumService::new(&state.db).get_units(subject_id).await?;

    Ok((StatusCode::OK, Json(units)))
}

/// Update a unit.
#[utoipa::path(
    put,
    path = "/api/units/{unit_id}",
    tag = CURRICULUM_TAG,
    params(
        ("unit_id" = i32, Path, description = "Unit ID")
    ),
    request_body = UpdateUnitDto,
    responses(
        (status = 200, description = "Successfully updated unit", body = UnitDto),
        (status = 400, description = "Invalid unit data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_unit(
    State(state): State<AppState>,
    session: Session,
    Path(unit_id): Path<i32>,
    Json(payload): Json<UpdateUnitDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let unit = CurriculumService::new(&state.db)
        .update_unit(unit_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(unit)))
}

/// Delete a unit.
///
/// Refused while questions or stages still reference the unit.
#[utoipa::path(
    delete,
    path = "/api/units/{unit_id}",
    tag = CURRICULUM_TAG,
    params(
        ("unit_id" = i32, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted unit"),
        (status = 400, description = "Unit is still referenced", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_unit(
    State(state): State<AppState>,
    session: Session,
    Path(unit_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    CurriculumService::new(&state.db).delete_unit(unit_id).await?;

    Ok(StatusCode::OK)
}
