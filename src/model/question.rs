use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full question view for teachers, including the answer key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub unit_id: i32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: i16,
    pub difficulty: i16,
}

/// Student-facing question view. The answer key is withheld.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestionDto {
    pub id: i32,
    pub prompt: String,
    pub options: Vec<String>,
    pub difficulty: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionDto {
    pub prompt: String,
    /// Exactly four answer options.
    pub options: Vec<String>,
    pub correct_index: i16,
    pub difficulty: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateQuestionDto {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: i16,
    pub difficulty: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedQuestionsDto {
    pub questions: Vec<QuestionDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttemptDto {
    pub chosen_index: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttemptResultDto {
    pub correct: bool,
    pub correct_index: i16,
}
