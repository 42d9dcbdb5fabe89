use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyTaskDto {
    pub id: i32,
    /// One of `answer_questions`, `clear_stage`, `login`.
    pub kind: String,
    pub target: i32,
    pub reward_gold: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateDailyTaskDto {
    pub kind: String,
    pub target: i32,
    pub reward_gold: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateDailyTaskDto {
    pub target: i32,
    pub reward_gold: i32,
}

/// A task definition decorated with today's progress for the calling student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyTaskStatusDto {
    pub task: DailyTaskDto,
    pub count: i32,
    pub claimed: bool,
    pub claimable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClaimResultDto {
    pub reward_gold: i32,
    pub gold_remaining: i32,
}
