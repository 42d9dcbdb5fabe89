//! Question and attempt domain models and operation parameters.

use chrono::NaiveDateTime;

use crate::model::question::{QuestionDto, QuizQuestionDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i32,
    pub unit_id: i32,
    pub prompt: String,
    pub options: [String; 4],
    pub correct_index: i16,
    pub difficulty: i16,
}

impl Question {
    pub fn from_entity(entity: entity::question::Model) -> Self {
        Self {
            id: entity.id,
            unit_id: entity.unit_id,
            prompt: entity.prompt,
            options: [
                entity.option_a,
                entity.option_b,
                entity.option_c,
                entity.option_d,
            ],
            correct_index: entity.correct_index,
            difficulty: entity.difficulty,
        }
    }

    /// Full view including the answer key. Teacher endpoints only.
    pub fn into_dto(self) -> QuestionDto {
        QuestionDto {
            id: self.id,
            unit_id: self.unit_id,
            prompt: self.prompt,
            options: self.options.to_vec(),
            correct_index: self.correct_index,
            difficulty: self.difficulty,
        }
    }

    /// Student-facing view with the answer key withheld.
    pub fn into_quiz_dto(self) -> QuizQuestionDto {
        QuizQuestionDto {
            id: self.id,
            prompt: self.prompt,
            options: self.options.to_vec(),
            difficulty: self.difficulty,
        }
    }
}

pub struct CreateQuestionParam {
    pub unit_id: i32,
    pub prompt: String,
    pub options: [String; 4],
    pub correct_index: i16,
    pub difficulty: i16,
}

pub struct UpdateQuestionParam {
    pub prompt: String,
    pub options: [String; 4],
    pub correct_index: i16,
    pub difficulty: i16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionAttempt {
    pub id: i32,
    pub question_id: i32,
    pub student_id: i32,
    pub chosen_index: i16,
    pub correct: bool,
    pub stage_id: Option<i32>,
    pub answered_at: NaiveDateTime,
}

impl QuestionAttempt {
    pub fn from_entity(entity: entity::question_attempt::Model) -> Self {
        Self {
            id: entity.id,
            question_id: entity.question_id,
            student_id: entity.student_id,
            chosen_index: entity.chosen_index,
            correct: entity.correct,
            stage_id: entity.stage_id,
            answered_at: entity.answered_at,
        }
    }
}

pub struct CreateAttemptParam {
    pub question_id: i32,
    pub student_id: i32,
    pub chosen_index: i16,
    pub correct: bool,
    pub stage_id: Option<i32>,
}
