//! Route configuration and OpenAPI documentation.
//!
//! Every controller handler is registered through [`OpenApiRouter`] so the
//! served Swagger UI stays in lockstep with the actual routes.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        announcement, auth, avatar, class, curriculum, daily_task, map, question, report, shop,
        stage,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(tags(
    (name = "auth", description = "Account registration, login, and sessions"),
    (name = "class", description = "Class management and enrolment"),
    (name = "curriculum", description = "Subjects and units"),
    (name = "question", description = "Question authoring and practice attempts"),
    (name = "stage", description = "Stage authoring, unlocks, quizzes, and grading"),
    (name = "shop", description = "Item catalogue, purchases, and inventories"),
    (name = "avatar", description = "Avatar part catalogue and equipment"),
    (name = "map", description = "Class game maps and placed objects"),
    (name = "announcement", description = "Class notice board"),
    (name = "daily_task", description = "Daily task definitions, progress, and claims"),
    (name = "report", description = "Teacher-facing progress reports")
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(auth_router())
        .merge(class_router())
        .merge(curriculum_router())
        .merge(question_router())
        .merge(stage_router())
        .merge(shop_router())
        .merge(avatar_router())
        .merge(map_router())
        .merge(announcement_router())
        .merge(daily_task_router())
        .merge(report_router())
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}

fn auth_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
}

fn class_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(class::create_class, class::get_classes))
        .routes(routes!(
            class::get_class,
            class::update_class,
            class::delete_class
        ))
        .routes(routes!(class::regenerate_join_code))
        .routes(routes!(class::get_roster))
        .routes(routes!(class::create_student))
        .routes(routes!(class::remove_student))
        .routes(routes!(class::join_class))
        .routes(routes!(class::get_joined_classes))
}

fn curriculum_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(curriculum::create_subject, curriculum::get_subjects))
        .routes(routes!(
            curriculum::update_subject,
            curriculum::delete_subject
        ))
        .routes(routes!(curriculum::create_unit))
        .routes(routes!(curriculum::get_units))
        .routes(routes!(curriculum::update_unit, curriculum::delete_unit))
}

fn question_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(question::create_question, question::get_questions))
        .routes(routes!(
            question::update_question,
            question::delete_question
        ))
        .routes(routes!(question::attempt_question))
}

fn stage_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(stage::create_stage, stage::get_stages))
        .routes(routes!(stage::update_stage, stage::delete_stage))
        .routes(routes!(stage::get_stage_statuses))
        .routes(routes!(stage::get_quiz))
        .routes(routes!(stage::submit_stage))
}

fn shop_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(shop::create_item, shop::get_catalogue))
        .routes(routes!(shop::update_item, shop::delete_item))
        .routes(routes!(shop::buy_item))
        .routes(routes!(shop::get_inventory))
}

fn avatar_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(avatar::create_part, avatar::get_parts))
        .routes(routes!(avatar::update_part, avatar::delete_part))
        .routes(routes!(avatar::equip))
        .routes(routes!(avatar::unequip))
        .routes(routes!(avatar::get_avatar))
}

fn map_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(map::create_map, map::get_maps))
        .routes(routes!(map::get_map, map::update_map, map::delete_map))
        .routes(routes!(map::create_object))
        .routes(routes!(map::update_object, map::delete_object))
}

fn announcement_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            announcement::create_announcement,
            announcement::get_announcements
        ))
        .routes(routes!(
            announcement::update_announcement,
            announcement::delete_announcement
        ))
}

fn daily_task_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(daily_task::create_task, daily_task::get_tasks))
        .routes(routes!(daily_task::get_today))
        .routes(routes!(daily_task::update_task, daily_task::delete_task))
        .routes(routes!(daily_task::claim_task))
}

fn report_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(report::get_class_report))
        .routes(routes!(report::get_class_unit_report))
        .routes(routes!(report::get_student_report))
}
