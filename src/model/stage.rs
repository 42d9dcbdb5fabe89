use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::question::QuizQuestionDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StageDto {
    pub id: i32,
    pub class_id: i32,
    pub name: String,
    pub sort_order: i32,
    /// One of `sequential`, `min_level`, `dependency`.
    pub unlock_rule: String,
    pub min_level: i32,
    pub dependency_stage_id: Option<i32>,
    pub pass_threshold: i16,
    pub question_count: i16,
    pub reward_gold: i32,
    pub reward_exp: i32,
    pub unit_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateStageDto {
    pub name: String,
    pub sort_order: i32,
    pub unlock_rule: String,
    pub min_level: Option<i32>,
    pub dependency_stage_id: Option<i32>,
    pub pass_threshold: i16,
    pub question_count: i16,
    pub reward_gold: i32,
    pub reward_exp: i32,
    pub unit_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateStageDto {
    pub name: String,
    pub sort_order: i32,
    pub unlock_rule: String,
    pub min_level: Option<i32>,
    pub dependency_stage_id: Option<i32>,
    pub pass_threshold: i16,
    pub question_count: i16,
    pub reward_gold: i32,
    pub reward_exp: i32,
    pub unit_ids: Vec<i32>,
}

/// A stage as a student sees it on the class map: the stage plus the lock
/// state computed from the unlock rule and the student's own progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StageStatusDto {
    pub id: i32,
    pub name: String,
    pub sort_order: i32,
    pub pass_threshold: i16,
    pub reward_gold: i32,
    pub reward_exp: i32,
    pub locked: bool,
    pub cleared: bool,
    pub best_score: i16,
}

/// Questions drawn for one play-through of a stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StageQuizDto {
    pub stage_id: i32,
    pub questions: Vec<QuizQuestionDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StageAnswerDto {
    pub question_id: i32,
    pub chosen_index: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmitStageDto {
    pub answers: Vec<StageAnswerDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StageResultDto {
    /// Integer percent, 0-100.
    pub score: i16,
    pub passed: bool,
    /// True only the first time the stage is cleared; rewards are granted then.
    pub first_clear: bool,
    pub reward_gold: i32,
    pub reward_exp: i32,
}
