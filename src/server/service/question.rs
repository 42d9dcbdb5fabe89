//! Question service: authoring, listing, and student attempts.

use entity::daily_task::DailyTaskKind;
use sea_orm::DatabaseConnection;

use crate::{
    model::question::{
        AttemptDto, AttemptResultDto, CreateQuestionDto, PaginatedQuestionsDto, QuestionDto,
        UpdateQuestionDto,
    },
    server::{
        data::{
            question::QuestionRepository, question_attempt::QuestionAttemptRepository,
            unit::UnitRepository,
        },
        error::AppError,
        model::{
            question::{CreateAttemptParam, CreateQuestionParam, UpdateQuestionParam},
            user::User,
        },
        service::daily_task,
    },
};

pub struct QuestionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        unit_id: i32,
        dto: CreateQuestionDto,
    ) -> Result<QuestionDto, AppError> {
        let unit_repo = UnitRepository::new(self.db);
        let repo = QuestionRepository::new(self.db);

        if unit_repo.get_by_id(unit_id).await?.is_none() {
            return Err(AppError::NotFound("Unit not found".to_string()));
        }

        let options = validate_options(dto.options)?;
        validate_correct_index(dto.correct_index)?;

        if dto.prompt.trim().is_empty() {
            return Err(AppError::BadRequest("Prompt is required".to_string()));
        }

        let question = repo
            .create(CreateQuestionParam {
                unit_id,
                prompt: dto.prompt,
                options,
                correct_index: dto.correct_index,
                difficulty: dto.difficulty,
            })
            .await?;

        Ok(question.into_dto())
    }

    pub async fn get_by_unit_paginated(
        &self,
        unit_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedQuestionsDto, AppError> {
        let unit_repo = UnitRepository::new(self.db);
        let repo = QuestionRepository::new(self.db);

        if unit_repo.get_by_id(unit_id).await?.is_none() {
            return Err(AppError::NotFound("Unit not found".to_string()));
        }

        let (questions, total) = repo.get_by_unit_paginated(unit_id, page, per_page).await?;

        Ok(PaginatedQuestionsDto {
            questions: questions.into_iter().map(|q| q.into_dto()).collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    pub async fn update(&self, id: i32, dto: UpdateQuestionDto) -> Result<QuestionDto, AppError> {
        let repo = QuestionRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Question not found".to_string()));
        }

        let options = validate_options(dto.options)?;
        validate_correct_index(dto.correct_index)?;

        let question = repo
            .update(
                id,
                UpdateQuestionParam {
                    prompt: dto.prompt,
                    options,
                    correct_index: dto.correct_index,
                    difficulty: dto.difficulty,
                },
            )
            .await?;

        Ok(question.into_dto())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = QuestionRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Question not found".to_string()));
        }

        repo.soft_delete(id).await?;

        Ok(())
    }

    /// Records a standalone attempt and reveals the answer key for feedback.
    ///
    /// Attempts are append-only; re-answering the same question records a new
    /// row. Each attempt counts toward answer-questions daily tasks.
    pub async fn attempt(
        &self,
        student: &User,
        question_id: i32,
        dto: AttemptDto,
    ) -> Result<AttemptResultDto, AppError> {
        let repo = QuestionRepository::new(self.db);
        let attempt_repo = QuestionAttemptRepository::new(self.db);

        let Some(question) = repo.get_by_id(question_id).await? else {
            return Err(AppError::NotFound("Question not found".to_string()));
        };

        validate_correct_index(dto.chosen_index)?;

        let correct = dto.chosen_index == question.correct_index;

        attempt_repo
            .create(CreateAttemptParam {
                question_id,
                student_id: student.id,
                chosen_index: dto.chosen_index,
                correct,
                stage_id: None,
            })
            .await?;

        daily_task::record_event(self.db, student.id, DailyTaskKind::AnswerQuestions).await?;

        Ok(AttemptResultDto {
            correct,
            correct_index: question.correct_index,
        })
    }
}

fn validate_options(options: Vec<String>) -> Result<[String; 4], AppError> {
    let options: [String; 4] = options
        .try_into()
        .map_err(|_| AppError::BadRequest("Exactly four options are required".to_string()))?;

    if options.iter().any(|option| option.trim().is_empty()) {
        return Err(AppError::BadRequest("Options must not be empty".to_string()));
    }

    Ok(options)
}

fn validate_correct_index(index: i16) -> Result<(), AppError> {
    if !(0..=3).contains(&index) {
        return Err(AppError::BadRequest(
            "Answer index must be between 0 and 3".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_option_counts() {
        assert!(validate_options(vec!["a".to_string(); 3]).is_err());
        assert!(validate_options(vec!["a".to_string(); 5]).is_err());
        assert!(validate_options(vec!["a".to_string(); 4]).is_ok());
    }

    #[test]
    fn rejects_blank_options() {
        let options = vec![
            "a".to_string(),
            " ".to_string(),
            "c".to_string(),
            "d".to_string(),
        ];
        assert!(validate_options(options).is_err());
    }

    #[test]
    fn rejects_out_of_range_answer_index() {
        assert!(validate_correct_index(-1).is_err());
        assert!(validate_correct_index(4).is_err());
        assert!(validate_correct_index(0).is_ok());
        assert!(validate_correct_index(3).is_ok());
    }
}
