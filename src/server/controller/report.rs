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
        report::{ClassReportDto, ClassUnitReportDto, StudentReportDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Get the per-student report for a class.
///
/// One row per enrolled student: attempts, correct rate, stages cleared, and
/// level.
///
/// # Access Control
/// - `Teacher` - Only the owning teacher can view reports
#[utoipa::path(
    get,
    path = "/api/classes/{class_id}/report",
    tag = REPORT_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Per-student class report", body = ClassReportDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_class_report(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let report = ReportService::new(&state.db)
        .class_report(&teacher, class_id)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Get the per-unit breakdown for one student.
///
/// The student must be enrolled in one of the caller's classes.
#[utoipa::path(
    get,
    path = "/api/students/{student_id}/report",
    tag = REPORT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student user ID")
    ),
    responses(
        (status = 200, description = "Per-unit student report", body = StudentReportDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_report(
    State(state): State<AppState>,
    session: Session,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let report = ReportService::new(&state.db)
        .student_report(&teacher, student_id)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Get the class-wide per-unit correct rates.
///
/// Highlights which units the class as a whole struggles with.
#[utoipa::path(
    get,
    path = "/api/classes/{class_id}/report/units",
    tag = REPORT_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Per-unit class report", body = ClassUnitReportDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_class_unit_report(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let report = ReportService::new(&state.db)
        .class_unit_report(&teacher, class_id)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}
