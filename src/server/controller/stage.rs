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
        stage::{
            CreateStageDto, StageDto, StageQuizDto, StageResultDto, StageStatusDto,
            SubmitStageDto, UpdateStageDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::stage::StageService,
        state::AppState,
    },
};

/// Tag for grouping stage endpoints in OpenAPI documentation
pub static STAGE_TAG: &str = "stage";

/// Create a stage in a class.
///
/// A stage draws its quiz from the linked units and unlocks by one of three
/// rules: sequentially after the previous stage, at a minimum level, or after
/// a specific other stage is cleared.
///
/// # Access Control
/// - `Teacher` - Only the owning teacher can author stages
#[utoipa::path(
    post,
    path = "/api/classes/{class_id}/stages",
    tag = STAGE_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    request_body = CreateStageDto,
    responses(
        (status = 201, description = "Successfully created stage", body = StageDto),
        (status = 400, description = "Invalid stage data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_stage(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
    Json(payload): Json<CreateStageDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let stage = StageService::new(&state.db)
        .create(&teacher, class_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(stage)))
}

/// Get a class's stages in play order.
#[utoipa::path(
    get,
    path = "/api/classes/{class_id}/stages",
    tag = STAGE_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Stages in the class", body = Vec<StageDto>),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stages(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let stages = StageService::new(&state.db)
        .get_by_class(&teacher, class_id)
        .await?;

    Ok((StatusCode::OK, Json(stages)))
}

/// Update a stage's configuration and unit links.
#[utoipa::path(
    put,
    path = "/api/stages/{stage_id}",
    tag = STAGE_TAG,
    params(
        ("stage_id" = i32, Path, description = "Stage ID")
    ),
    request_body = UpdateStageDto,
    responses(
        (status = 200, description = "Successfully updated stage", body = StageDto),
        (status = 400, description = "Invalid stage data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Stage not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_stage(
    State(state): State<AppState>,
    session: Session,
    Path(stage_id): Path<i32>,
    Json(payload): Json<UpdateStageDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let stage = StageService::new(&state.db)
        .update(&teacher, stage_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(stage)))
}

/// Delete a stage along with its unit links and progress.
#[utoipa::path(
    delete,
    path = "/api/stages/{stage_id}",
    tag = STAGE_TAG,
    params(
        ("stage_id" = i32, Path, description = "Stage ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted stage"),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Stage not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_stage(
    State(state): State<AppState>,
    session: Session,
    Path(stage_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    StageService::new(&state.db).delete(&teacher, stage_id).await?;

    Ok(StatusCode::OK)
}

/// Get the stage map as the calling student sees it.
///
/// Every stage in the class comes back with its lock state, clear state, and
/// the student's best score. Locked stages hide nothing else; the client
/// renders them greyed out.
///
/// # Access Control
/// - `Student` - The caller must be enrolled in the class
#[utoipa::path(
    get,
    path = "/api/student/classes/{class_id}/stages",
    tag = STAGE_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Stage statuses for the caller", body = Vec<StageStatusDto>),
        (status = 401, description = "User not authenticated or not a student", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stage_statuses(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let statuses = StageService::new(&state.db)
        .get_statuses(&student, class_id)
        .await?;

    Ok((StatusCode::OK, Json(statuses)))
}

/// Start a stage quiz.
///
/// Draws a fresh random selection from the stage's unit question pool. The
/// correct indices are withheld until submission.
///
/// # Returns
/// - `200 OK` - The drawn quiz
/// - `400 Bad Request` - Stage is locked for the caller
#[utoipa::path(
    get,
    path = "/api/stages/{stage_id}/quiz",
    tag = STAGE_TAG,
    params(
        ("stage_id" = i32, Path, description = "Stage ID")
    ),
    responses(
        (status = 200, description = "Quiz questions", body = StageQuizDto),
        (status = 400, description = "Stage is locked", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a student", body = ErrorDto),
        (status = 404, description = "Stage not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_quiz(
    State(state): State<AppState>,
    session: Session,
    Path(stage_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let quiz = StageService::new(&state.db).quiz(&student, stage_id).await?;

    Ok((StatusCode::OK, Json(quiz)))
}

/// Submit stage quiz answers.
///
/// Grades the submission, records each answer as an attempt, updates the
/// student's best score, and pays out the stage rewards on the first clear
/// only. Retries after a clear can still raise the best score.
#[utoipa::path(
    post,
    path = "/api/stages/{stage_id}/submit",
    tag = STAGE_TAG,
    params(
        ("stage_id" = i32, Path, description = "Stage ID")
    ),
    request_body = SubmitStageDto,
    responses(
        (status = 200, description = "Graded result", body = StageResultDto),
        (status = 400, description = "Stage locked or submission malformed", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a student", body = ErrorDto),
        (status = 404, description = "Stage not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_stage(
    State(state): State<AppState>,
    session: Session,
    Path(stage_id): Path<i32>,
    Json(payload): Json<SubmitStageDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let result = StageService::new(&state.db)
        .submit(&student, stage_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
