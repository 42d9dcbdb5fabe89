use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        question::{
            AttemptDto, AttemptResultDto, CreateQuestionDto, PaginatedQuestionsDto, QuestionDto,
            UpdateQuestionDto,
        },
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::question::QuestionService,
        state::AppState,
    },
};

/// Tag for grouping question endpoints in OpenAPI documentation
pub static QUESTION_TAG: &str = "question";

/// Create a question in a unit.
///
/// Questions are four-option multiple choice. The correct index must point at
/// one of the four options.
///
/// # Access Control
/// - `Teacher` - Only teachers can author questions
#[utoipa::path(
    post,
    path = "/api/units/{unit_id}/questions",
    tag = QUESTION_TAG,
    params(
        ("unit_id" = i32, Path, description = "Unit ID")
    ),
    request_body = CreateQuestionDto,
    responses(
        (status = 201, description = "Successfully created question", body = QuestionDto),
        (status = 400, description = "Invalid question data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_question(
    State(state): State<AppState>,
    session: Session,
    Path(unit_id): Path<i32>,
    Json(payload): Json<CreateQuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let question = QuestionService::new(&state.db)
        .create(unit_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(question)))
}

/// Get a unit's questions, paginated.
///
/// Includes the correct index, so this view is teacher-only. Students only
/// ever see questions through stage quizzes.
#[utoipa::path(
    get,
    path = "/api/units/{unit_id}/questions",
    tag = QUESTION_TAG,
    params(
        ("unit_id" = i32, Path, description = "Unit ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated questions", body = PaginatedQuestionsDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_questions(
    State(state): State<AppState>,
    session: Session,
    Path(unit_id): Path<i32>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let questions = QuestionService::new(&state.db)
        .get_by_unit_paginated(unit_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(questions)))
}

/// Update a question.
#[utoipa::path(
    put,
    path = "/api/questions/{question_id}",
    tag = QUESTION_TAG,
    params(
        ("question_id" = i32, Path, description = "Question ID")
    ),
    request_body = UpdateQuestionDto,
    responses(
        (status = 200, description = "Successfully updated question", body = QuestionDto),
        (status = 400, description = "Invalid question data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_question(
    State(state): State<AppState>,
    session: Session,
    Path(question_id): Path<i32>,
    Json(payload): Json<UpdateQuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let question = QuestionService::new(&state.db)
        .update(question_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(question)))
}

/// Delete a question.
///
/// Soft delete; past attempts keep referencing the row.
#[utoipa::path(
    delete,
    path = "/api/questions/{question_id}",
    tag = QUESTION_TAG,
    params(
        ("question_id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted question"),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_question(
    State(state): State<AppState>,
    session: Session,
    Path(question_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    QuestionService::new(&state.db).delete(question_id).await?;

    Ok(StatusCode::OK)
}

/// Answer a question in practice mode.
///
/// Records the attempt, counts it toward the daily answering task, and
/// reveals the correct index in the response.
///
/// # Access Control
/// - `Student` - Only students can answer questions
#[utoipa::path(
    post,
    path = "/api/questions/{question_id}/attempt",
    tag = QUESTION_TAG,
    params(
        ("question_id" = i32, Path, description = "Question ID")
    ),
    request_body = AttemptDto,
    responses(
        (status = 200, description = "Attempt result", body = AttemptResultDto),
        (status = 400, description = "Chosen index out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a student", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attempt_question(
    State(state): State<AppState>,
    session: Session,
    Path(question_id): Path<i32>,
    Json(payload): Json<AttemptDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let result = QuestionService::new(&state.db)
        .attempt(&student, question_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
