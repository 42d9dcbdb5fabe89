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
        class::{ClassDto, CreateClassDto, JoinClassDto, RosterEntryDto, UpdateClassDto},
        user::{CreateStudentDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::class::ClassService,
        state::AppState,
    },
};

/// Tag for grouping class endpoints in OpenAPI documentation
pub static CLASS_TAG: &str = "class";

/// Create a new class.
///
/// Creates a class owned by the calling teacher and assigns it a fresh join
/// code students can use to enrol.
///
/// # Access Control
/// - `Teacher` - Only teachers can create classes
///
/// # Returns
/// - `201 Created` - Successfully created class
/// - `400 Bad Request` - Invalid class data
/// - `401 Unauthorized` - User not authenticated or not a teacher
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/classes",
    tag = CLASS_TAG,
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Successfully created class", body = ClassDto),
        (status = 400, description = "Invalid class data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_class(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let class = ClassService::new(&state.db).create(&teacher, payload).await?;

    Ok((StatusCode::CREATED, Json(class)))
}

/// Get all classes owned by the calling teacher.
#[utoipa::path(
    get,
    path = "/api/classes",
    tag = CLASS_TAG,
    responses(
        (status = 200, description = "Classes owned by the caller", body = Vec<ClassDto>),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let classes = ClassService::new(&state.db).get_all(&teacher).await?;

    Ok((StatusCode::OK, Json(classes)))
}

/// Get one class owned by the calling teacher.
#[utoipa::path(
    get,
    path = "/api/classes/{class_id}",
    tag = CLASS_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "The requested class", body = ClassDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_class(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let class = ClassService::new(&state.db)
        .get_by_id(&teacher, class_id)
        .await?;

    Ok((StatusCode::OK, Json(class)))
}

/// Rename or archive a class.
///
/// Archived classes keep their data but reject new student joins.
///
/// # Access Control
/// - `Teacher` - Only the owning teacher can update a class
#[utoipa::path(
    put,
    path = "/api/classes/{class_id}",
    tag = CLASS_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    request_body = UpdateClassDto,
    responses(
        (status = 200, description = "Successfully updated class", body = ClassDto),
        (status = 400, description = "Invalid class data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_class(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
    Json(payload): Json<UpdateClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let class = ClassService::new(&state.db)
        .update(&teacher, class_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(class)))
}

/// Delete a class and its enrolments.
#[utoipa::path(
    delete,
    path = "/api/classes/{class_id}",
    tag = CLASS_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted class"),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_class(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    ClassService::new(&state.db).delete(&teacher, class_id).await?;

    Ok(StatusCode::OK)
}

/// Replace a class's join code.
///
/// Generates a fresh unique code. The old code stops working immediately.
#[utoipa::path(
    post,
    path = "/api/classes/{class_id}/join-code",
    tag = CLASS_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Class with its new join code", body = ClassDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn regenerate_join_code(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let class = ClassService::new(&state.db)
        .regenerate_join_code(&teacher, class_id)
        .await?;

    Ok((StatusCode::OK, Json(class)))
}

/// Get the class roster.
///
/// Returns every enrolled student with their level, gold, and join date,
/// ordered by display name.
#[utoipa::path(
    get,
    path = "/api/classes/{class_id}/roster",
    tag = CLASS_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Enrolled students", body = Vec<RosterEntryDto>),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roster(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let roster = ClassService::new(&state.db)
        .get_roster(&teacher, class_id)
        .await?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Create a student account and enrol it in the class.
///
/// Teachers provision student accounts directly; students never self-register.
///
/// # Returns
/// - `201 Created` - Successfully created and enrolled student
/// - `400 Bad Request` - Invalid username, password, or display name
#[utoipa::path(
    post,
    path = "/api/classes/{class_id}/students",
    tag = CLASS_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = UserDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let student = ClassService::new(&state.db)
        .create_student(&teacher, class_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(student)))
}

/// Remove a student from the class roster.
///
/// The student's account and progress survive; only the enrolment is removed.
#[utoipa::path(
    delete,
    path = "/api/classes/{class_id}/students/{student_id}",
    tag = CLASS_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID"),
        ("student_id" = i32, Path, description = "Student user ID")
    ),
    responses(
        (status = 200, description = "Successfully removed student"),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Class or student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_student(
    State(state): State<AppState>,
    session: Session,
    Path((class_id, student_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    ClassService::new(&state.db)
        .remove_student(&teacher, class_id, student_id)
        .await?;

    Ok(StatusCode::OK)
}

/// Join a class with a join code.
///
/// Joining twice with the same code is a no-op. Archived classes reject joins.
///
/// # Access Control
/// - `Student` - Only students can join classes
#[utoipa::path(
    post,
    path = "/api/student/classes/join",
    tag = CLASS_TAG,
    request_body = JoinClassDto,
    responses(
        (status = 200, description = "The joined class", body = ClassDto),
        (status = 401, description = "User not authenticated or not a student", body = ErrorDto),
        (status = 404, description = "No open class matches the code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_class(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<JoinClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let class = ClassService::new(&state.db).join(&student, payload).await?;

    Ok((StatusCode::OK, Json(class)))
}

/// Get the classes the calling student is enrolled in.
#[utoipa::path(
    get,
    path = "/api/student/classes",
    tag = CLASS_TAG,
    responses(
        (status = 200, description = "Classes the caller is enrolled in", body = Vec<ClassDto>),
        (status = 401, description = "User not authenticated or not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_joined_classes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let classes = ClassService::new(&state.db).get_joined(&student).await?;

    Ok((StatusCode::OK, Json(classes)))
}
