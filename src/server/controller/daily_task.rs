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
        daily_task::{
            ClaimResultDto, CreateDailyTaskDto, DailyTaskDto, DailyTaskStatusDto,
            UpdateDailyTaskDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::daily_task::DailyTaskService,
        state::AppState,
    },
};

/// Tag for grouping daily task endpoints in OpenAPI documentation
pub static DAILY_TASK_TAG: &str = "daily_task";

/// Define a daily task.
///
/// # Access Control
/// - `Teacher` - Only teachers can define tasks
#[utoipa::path(
    post,
    path = "/api/daily-tasks",
    tag = DAILY_TASK_TAG,
    request_body = CreateDailyTaskDto,
    responses(
        (status = 201, description = "Successfully created task", body = DailyTaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDailyTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let task = DailyTaskService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Get all daily task definitions.
#[utoipa::path(
    get,
    path = "/api/daily-tasks",
    tag = DAILY_TASK_TAG,
    responses(
        (status = 200, description = "All task definitions", body = Vec<DailyTaskDto>),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let tasks = DailyTaskService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(tasks)))
}

/// Update a task's target and reward.
#[utoipa::path(
    put,
    path = "/api/daily-tasks/{task_id}",
    tag = DAILY_TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Daily task ID")
    ),
    request_body = UpdateDailyTaskDto,
    responses(
        (status = 200, description = "Successfully updated task", body = DailyTaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
    Json(payload): Json<UpdateDailyTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let task = DailyTaskService::new(&state.db)
        .update(task_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(task)))
}

/// Delete a task definition and its progress rows.
#[utoipa::path(
    delete,
    path = "/api/daily-tasks/{task_id}",
    tag = DAILY_TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Daily task ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted task"),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    DailyTaskService::new(&state.db).delete(task_id).await?;

    Ok(StatusCode::OK)
}

/// Get today's tasks with the caller's progress.
///
/// # Access Control
/// - `Student` - Progress is tracked per student
#[utoipa::path(
    get,
    path = "/api/daily-tasks/today",
    tag = DAILY_TASK_TAG,
    responses(
        (status = 200, description = "Today's tasks with progress", body = Vec<DailyTaskStatusDto>),
        (status = 401, description = "User not authenticated or not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_today(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let statuses = DailyTaskService::new(&state.db).today(&student).await?;

    Ok((StatusCode::OK, Json(statuses)))
}

/// Claim a completed task's gold reward.
///
/// Each task pays out once per day; the claim check and the payout commit in
/// one transaction.
#[utoipa::path(
    post,
    path = "/api/daily-tasks/{task_id}/claim",
    tag = DAILY_TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Daily task ID")
    ),
    responses(
        (status = 200, description = "Claim receipt", body = ClaimResultDto),
        (status = 400, description = "Target not reached or already claimed", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a student", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let receipt = DailyTaskService::new(&state.db)
        .claim(&student, task_id)
        .await?;

    Ok((StatusCode::OK, Json(receipt)))
}
