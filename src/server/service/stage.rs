//! Stage service: authoring, the unlock rule engine, quizzes, and submissions.
//!
//! Submissions are the heart of the game loop. A submission is graded against
//! the answer key, then attempts, progress, first-clear rewards, and daily
//! task counts are written in one transaction so a crash can never leave a
//! cleared stage without its rewards.

use entity::{daily_task::DailyTaskKind, stage::UnlockRule};
use rand::seq::SliceRandom;
use sea_orm::{ActiveEnum, DatabaseConnection, TransactionTrait};
use std::collections::{HashMap, HashSet};

use crate::{
    model::stage::{
        CreateStageDto, StageDto, StageQuizDto, StageResultDto, StageStatusDto, SubmitStageDto,
        UpdateStageDto,
    },
    server::{
        data::{
            class::ClassRepository, question::QuestionRepository,
            question_attempt::QuestionAttemptRepository, stage::StageRepository,
            stage_progress::StageProgressRepository, unit::UnitRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            question::CreateAttemptParam,
            stage::{score_percent, CreateStageParam, Stage, StageStatus, UpdateStageParam},
            user::User,
        },
        service::daily_task::{self, flatten_transaction_error},
    },
};

pub struct StageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        teacher: &User,
        class_id: i32,
        dto: CreateStageDto,
    ) -> Result<StageDto, AppError> {
        let repo = StageRepository::new(self.db);

        self.owned_class(teacher, class_id).await?;

        let param = self
            .validate_stage(
                class_id,
                None,
                &dto.unlock_rule,
                dto.min_level,
                dto.dependency_stage_id,
                dto.pass_threshold,
                dto.question_count,
                &dto.unit_ids,
            )
            .await?;

        let stage = repo
            .create(CreateStageParam {
                class_id,
                name: dto.name,
                sort_order: dto.sort_order,
                unlock_rule: param.rule,
                min_level: param.min_level,
                dependency_stage_id: dto.dependency_stage_id,
                pass_threshold: dto.pass_threshold,
                question_count: dto.question_count,
                reward_gold: dto.reward_gold,
                reward_exp: dto.reward_exp,
            })
            .await?;

        repo.set_units(stage.id, &dto.unit_ids).await?;

        Ok(stage.into_dto(dto.unit_ids))
    }

    pub async fn update(
        &self,
        teacher: &User,
        stage_id: i32,
        dto: UpdateStageDto,
    ) -> Result<StageDto, AppError> {
        let repo = StageRepository::new(self.db);

        let stage = self.owned_stage(teacher, stage_id).await?;

        let param = self
            .validate_stage(
                stage.class_id,
                Some(stage_id),
                &dto.unlock_rule,
                dto.min_level,
                dto.dependency_stage_id,
                dto.pass_threshold,
                dto.question_count,
                &dto.unit_ids,
            )
            .await?;

        let stage = repo
            .update(
                stage_id,
                UpdateStageParam {
                    name: dto.name,
                    sort_order: dto.sort_order,
                    unlock_rule: param.rule,
                    min_level: param.min_level,
                    dependency_stage_id: dto.dependency_stage_id,
                    pass_threshold: dto.pass_threshold,
                    question_count: dto.question_count,
                    reward_gold: dto.reward_gold,
                    reward_exp: dto.reward_exp,
                },
            )
            .await?;

        repo.set_units(stage_id, &dto.unit_ids).await?;

        Ok(stage.into_dto(dto.unit_ids))
    }

    pub async fn delete(&self, teacher: &User, stage_id: i32) -> Result<(), AppError> {
        let repo = StageRepository::new(self.db);

        self.owned_stage(teacher, stage_id).await?;
        repo.delete(stage_id).await?;

        Ok(())
    }

    /// Teacher view: all stages of a class with their unit links.
    pub async fn get_by_class(
        &self,
        teacher: &User,
        class_id: i32,
    ) -> Result<Vec<StageDto>, AppError> {
        let repo = StageRepository::new(self.db);

        self.owned_class(teacher, class_id).await?;

        let stages = repo.get_by_class(class_id).await?;
        let mut dtos = Vec::with_capacity(stages.len());
        for stage in stages {
            let unit_ids = repo.get_unit_ids(stage.id).await?;
            dtos.push(stage.into_dto(unit_ids));
        }

        Ok(dtos)
    }

    /// Student view: the class map with each stage's computed lock state.
    pub async fn get_statuses(
        &self,
        student: &User,
        class_id: i32,
    ) -> Result<Vec<StageStatusDto>, AppError> {
        let stage_repo = StageRepository::new(self.db);
        let progress_repo = StageProgressRepository::new(self.db);

        self.require_membership(student, class_id).await?;

        let stages = stage_repo.get_by_class(class_id).await?;
        let stage_ids: Vec<i32> = stages.iter().map(|stage| stage.id).collect();

        let progress: HashMap<i32, _> = progress_repo
            .get_by_student(student.id, &stage_ids)
            .await?
            .into_iter()
            .map(|row| (row.stage_id, row))
            .collect();

        let cleared: HashMap<i32, bool> = progress
            .iter()
            .map(|(stage_id, row)| (*stage_id, row.cleared))
            .collect();
        let level = student.level();

        Ok(stages
            .iter()
            .map(|stage| {
                let row = progress.get(&stage.id);
                StageStatus {
                    locked: !stage.is_unlocked(&stages, &cleared, level),
                    cleared: row.map(|row| row.cleared).unwrap_or(false),
                    best_score: row.map(|row| row.best_score).unwrap_or(0),
                    stage: stage.clone(),
                }
                .into_dto()
            })
            .collect())
    }

    /// Draws a quiz for one play-through of an unlocked stage.
    ///
    /// Questions are sampled from the stage's linked units without the answer
    /// key. A locked stage refuses to deal.
    pub async fn quiz(&self, student: &User, stage_id: i32) -> Result<StageQuizDto, AppError> {
        let stage_repo = StageRepository::new(self.db);
        let question_repo = QuestionRepository::new(self.db);

        let stage = self.unlocked_stage(student, stage_id).await?;

        let unit_ids = stage_repo.get_unit_ids(stage_id).await?;
        let mut pool = question_repo.get_by_units(&unit_ids).await?;

        pool.shuffle(&mut rand::rng());
        pool.truncate(stage.question_count.max(0) as usize);

        Ok(StageQuizDto {
            stage_id,
            questions: pool.into_iter().map(|q| q.into_quiz_dto()).collect(),
        })
    }

    /// Grades a submission and records its consequences atomically.
    ///
    /// Score is correct answers over total answers as an integer percent; the
    /// stage passes at or above its threshold. Rewards are granted only on the
    /// first clear, inside the same transaction as the progress upsert.
    pub async fn submit(
        &self,
        student: &User,
        stage_id: i32,
        dto: SubmitStageDto,
    ) -> Result<StageResultDto, AppError> {
        let stage_repo = StageRepository::new(self.db);
        let question_repo = QuestionRepository::new(self.db);

        let stage = self.unlocked_stage(student, stage_id).await?;
        let unit_ids = stage_repo.get_unit_ids(stage_id).await?;

        // A submission must answer a full quiz draw exactly once per
        // question; otherwise resubmitting one known answer would clear any
        // threshold.
        let mut seen = HashSet::with_capacity(dto.answers.len());
        for answer in &dto.answers {
            if !seen.insert(answer.question_id) {
                return Err(AppError::BadRequest(
                    "Duplicate question in submission".to_string(),
                ));
            }
        }

        let pool_size = question_repo.get_by_units(&unit_ids).await?.len();
        let expected = (stage.question_count.max(0) as usize).min(pool_size);
        if dto.answers.len() != expected {
            return Err(AppError::BadRequest(
                "Submission must answer every question of the quiz".to_string(),
            ));
        }

        // Grade before opening the transaction; grading only reads.
        let mut graded = Vec::with_capacity(dto.answers.len());
        for answer in &dto.answers {
            let Some(question) = question_repo.get_by_id(answer.question_id).await? else {
                return Err(AppError::BadRequest("Unknown question in submission".to_string()));
            };

            if !unit_ids.contains(&question.unit_id) {
                return Err(AppError::BadRequest(
                    "Question does not belong to this stage".to_string(),
                ));
            }

            if !(0..=3).contains(&answer.chosen_index) {
                return Err(AppError::BadRequest(
                    "Answer index must be between 0 and 3".to_string(),
                ));
            }

            graded.push((
                answer.question_id,
                answer.chosen_index,
                answer.chosen_index == question.correct_index,
            ));
        }

        let correct = graded.iter().filter(|(_, _, correct)| *correct).count();
        let score = score_percent(correct, graded.len());
        let passed = score >= stage.pass_threshold;

        let student_id = student.id;
        let reward_gold = stage.reward_gold;
        let reward_exp = stage.reward_exp;

        self.db
            .transaction::<_, StageResultDto, AppError>(move |txn| {
                Box::pin(async move {
                    let attempt_repo = QuestionAttemptRepository::new(txn);
                    let progress_repo = StageProgressRepository::new(txn);
                    let user_repo = UserRepository::new(txn);

                    for (question_id, chosen_index, correct) in &graded {
                        attempt_repo
                            .create(CreateAttemptParam {
                                question_id: *question_id,
                                student_id,
                                chosen_index: *chosen_index,
                                correct: *correct,
                                stage_id: Some(stage_id),
                            })
                            .await?;
                    }

                    let (_, first_clear) = progress_repo
                        .record_submission(stage_id, student_id, score, passed)
                        .await?;

                    if first_clear {
                        user_repo
                            .add_rewards(student_id, reward_gold, reward_exp)
                            .await?;
                    }

                    if passed {
                        daily_task::record_event(txn, student_id, DailyTaskKind::ClearStage)
                            .await?;
                    }

                    Ok(StageResultDto {
                        score,
                        passed,
                        first_clear,
                        reward_gold: if first_clear { reward_gold } else { 0 },
                        reward_exp: if first_clear { reward_exp } else { 0 },
                    })
                })
            })
            .await
            .map_err(flatten_transaction_error)
    }

    async fn owned_class(&self, teacher: &User, class_id: i32) -> Result<(), AppError> {
        let class_repo = ClassRepository::new(self.db);

        let Some(class) = class_repo.get_by_id(class_id).await? else {
            return Err(AppError::NotFound("Class not found".to_string()));
        };

        if class.teacher_id != teacher.id {
            return Err(AppError::NotFound("Class not found".to_string()));
        }

        Ok(())
    }

    async fn owned_stage(&self, teacher: &User, stage_id: i32) -> Result<Stage, AppError> {
        let repo = StageRepository::new(self.db);

        let Some(stage) = repo.get_by_id(stage_id).await? else {
            return Err(AppError::NotFound("Stage not found".to_string()));
        };

        self.owned_class(teacher, stage.class_id).await?;

        Ok(stage)
    }

    async fn require_membership(&self, student: &User, class_id: i32) -> Result<(), AppError> {
        let class_repo = ClassRepository::new(self.db);

        if !class_repo.is_member(class_id, student.id).await? {
            return Err(AppError::NotFound("Class not found".to_string()));
        }

        Ok(())
    }

    /// Loads a stage and verifies the student may play it right now.
    async fn unlocked_stage(&self, student: &User, stage_id: i32) -> Result<Stage, AppError> {
        let stage_repo = StageRepository::new(self.db);
        let progress_repo = StageProgressRepository::new(self.db);

        let Some(stage) = stage_repo.get_by_id(stage_id).await? else {
            return Err(AppError::NotFound("Stage not found".to_string()));
        };

        self.require_membership(student, stage.class_id).await?;

        let stages = stage_repo.get_by_class(stage.class_id).await?;
        let stage_ids: Vec<i32> = stages.iter().map(|s| s.id).collect();
        let cleared: HashMap<i32, bool> = progress_repo
            .get_by_student(student.id, &stage_ids)
            .await?
            .into_iter()
            .map(|row| (row.stage_id, row.cleared))
            .collect();

        if !stage.is_unlocked(&stages, &cleared, student.level()) {
            return Err(AppError::BadRequest("Stage is locked".to_string()));
        }

        Ok(stage)
    }

    #[allow(clippy::too_many_arguments)]
    async fn validate_stage(
        &self,
        class_id: i32,
        updating: Option<i32>,
        unlock_rule: &str,
        min_level: Option<i32>,
        dependency_stage_id: Option<i32>,
        pass_threshold: i16,
        question_count: i16,
        unit_ids: &[i32],
    ) -> Result<ValidatedRule, AppError> {
        let stage_repo = StageRepository::new(self.db);
        let unit_repo = UnitRepository::new(self.db);

        let rule = UnlockRule::try_from_value(&unlock_rule.to_string())
            .map_err(|_| AppError::BadRequest("Unknown unlock rule".to_string()))?;

        if !(1..=100).contains(&pass_threshold) {
            return Err(AppError::BadRequest(
                "Pass threshold must be between 1 and 100".to_string(),
            ));
        }

        if question_count < 1 {
            return Err(AppError::BadRequest(
                "Stage must draw at least one question".to_string(),
            ));
        }

        let min_level = min_level.unwrap_or(1);
        if rule == UnlockRule::MinLevel && min_level < 1 {
            return Err(AppError::BadRequest(
                "Minimum level must be at least 1".to_string(),
            ));
        }

        if rule == UnlockRule::Dependency {
            let Some(dependency_id) = dependency_stage_id else {
                return Err(AppError::BadRequest(
                    "Dependency rule requires a dependency stage".to_string(),
                ));
            };

            if Some(dependency_id) == updating {
                return Err(AppError::BadRequest(
                    "A stage cannot depend on itself".to_string(),
                ));
            }

            let dependency = stage_repo.get_by_id(dependency_id).await?;
            match dependency {
                Some(dependency) if dependency.class_id == class_id => {}
                _ => {
                    return Err(AppError::BadRequest(
                        "Dependency stage must exist in the same class".to_string(),
                    ))
                }
            }
        }

        let known_units = unit_repo.get_by_ids(unit_ids).await?;
        if known_units.len() != unit_ids.len() {
            return Err(AppError::BadRequest("Unknown unit in stage".to_string()));
        }

        Ok(ValidatedRule { rule, min_level })
    }
}

struct ValidatedRule {
    rule: UnlockRule,
    min_level: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::stage::StageAnswerDto;
    use entity::prelude::{DailyTask, DailyTaskProgress};
    use test_utils::{builder::TestBuilder, factory};

    /// Tests grading and rewards for a first successful clear.
    ///
    /// Two questions, one answered right, against a 50 percent threshold.
    ///
    /// Expected: score 50, passed, first clear, and rewards credited
    #[tokio::test]
    async fn first_clear_pays_rewards_once() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_stage_tables()
            .with_table(DailyTask)
            .with_table(DailyTaskProgress)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
        let (_, unit) = factory::helpers::create_unit_with_subject(db).await?;
        let student_model = factory::create_student(db).await?;
        ClassRepository::new(db)
            .add_student(class.id, student_model.id)
            .await?;

        let right = factory::create_question(db, unit.id).await?;
        let wrong = factory::question::QuestionFactory::new(db, unit.id)
            .correct_index(2)
            .build()
            .await?;

        let stage = factory::stage::StageFactory::new(db, class.id)
            .pass_threshold(50)
            .question_count(2)
            .reward_gold(10)
            .reward_exp(50)
            .build()
            .await?;
        StageRepository::new(db).set_units(stage.id, &[unit.id]).await?;

        let student = User::from_entity(student_model);
        let result = StageService::new(db)
            .submit(
                &student,
                stage.id,
                SubmitStageDto {
                    answers: vec![
                        StageAnswerDto {
                            question_id: right.id,
                            chosen_index: 0,
                        },
                        StageAnswerDto {
                            question_id: wrong.id,
                            chosen_index: 0,
                        },
                    ],
                },
            )
            .await?;

        assert_eq!(result.score, 50);
        assert!(result.passed);
        assert!(result.first_clear);
        assert_eq!(result.reward_gold, 10);
        assert_eq!(result.reward_exp, 50);

        let refreshed = UserRepository::new(db)
            .find_by_id(student.id)
            .await?
            .unwrap();
        assert_eq!(refreshed.gold, 10);
        assert_eq!(refreshed.exp, 50);

        Ok(())
    }

    /// Tests a passing retry after the stage is already cleared.
    ///
    /// Expected: passed again but no second reward payout
    #[tokio::test]
    async fn retry_after_clear_pays_nothing() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_stage_tables()
            .with_table(DailyTask)
            .with_table(DailyTaskProgress)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
        let (_, unit) = factory::helpers::create_unit_with_subject(db).await?;
        let student_model = factory::create_student(db).await?;
        ClassRepository::new(db)
            .add_student(class.id, student_model.id)
            .await?;

        let question = factory::create_question(db, unit.id).await?;
        let stage = factory::stage::StageFactory::new(db, class.id)
            .pass_threshold(50)
            .question_count(1)
            .reward_gold(10)
            .reward_exp(50)
            .build()
            .await?;
        StageRepository::new(db).set_units(stage.id, &[unit.id]).await?;

        let student = User::from_entity(student_model);
        let service = StageService::new(db);
        let submission = SubmitStageDto {
            answers: vec![StageAnswerDto {
                question_id: question.id,
                chosen_index: 0,
            }],
        };

        service.submit(&student, stage.id, submission.clone()).await?;
        let retry = service.submit(&student, stage.id, submission).await?;

        assert!(retry.passed);
        assert!(!retry.first_clear);
        assert_eq!(retry.reward_gold, 0);
        assert_eq!(retry.reward_exp, 0);

        let refreshed = UserRepository::new(db)
            .find_by_id(student.id)
            .await?
            .unwrap();
        assert_eq!(refreshed.gold, 10);

        Ok(())
    }

    /// Tests a failing submission.
    ///
    /// Expected: not passed, no clear, no rewards credited
    #[tokio::test]
    async fn failing_score_grants_nothing() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_stage_tables()
            .with_table(DailyTask)
            .with_table(DailyTaskProgress)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
        let (_, unit) = factory::helpers::create_unit_with_subject(db).await?;
        let student_model = factory::create_student(db).await?;
        ClassRepository::new(db)
            .add_student(class.id, student_model.id)
            .await?;

        let question = factory::create_question(db, unit.id).await?;
        let stage = factory::create_stage(db, class.id).await?;
        StageRepository::new(db).set_units(stage.id, &[unit.id]).await?;

        let student = User::from_entity(student_model);
        let result = StageService::new(db)
            .submit(
                &student,
                stage.id,
                SubmitStageDto {
                    answers: vec![StageAnswerDto {
                        question_id: question.id,
                        chosen_index: 1,
                    }],
                },
            )
            .await?;

        assert_eq!(result.score, 0);
        assert!(!result.passed);
        assert!(!result.first_clear);

        let refreshed = UserRepository::new(db)
            .find_by_id(student.id)
            .await?
            .unwrap();
        assert_eq!(refreshed.gold, 0);
        assert_eq!(refreshed.exp, 0);

        Ok(())
    }

    /// Tests a submission that repeats one question instead of answering the
    /// full quiz.
    ///
    /// Repeating a known answer must not count twice toward the score.
    ///
    /// Expected: Err(BadRequest) and no rewards credited
    #[tokio::test]
    async fn duplicate_answers_are_rejected() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_stage_tables()
            .with_table(DailyTask)
            .with_table(DailyTaskProgress)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
        let (_, unit) = factory::helpers::create_unit_with_subject(db).await?;
        let student_model = factory::create_student(db).await?;
        ClassRepository::new(db)
            .add_student(class.id, student_model.id)
            .await?;

        let known = factory::create_question(db, unit.id).await?;
        factory::create_question(db, unit.id).await?;

        let stage = factory::stage::StageFactory::new(db, class.id)
            .pass_threshold(100)
            .question_count(2)
            .build()
            .await?;
        StageRepository::new(db).set_units(stage.id, &[unit.id]).await?;

        let student = User::from_entity(student_model);
        let result = StageService::new(db)
            .submit(
                &student,
                stage.id,
                SubmitStageDto {
                    answers: vec![
                        StageAnswerDto {
                            question_id: known.id,
                            chosen_index: 0,
                        },
                        StageAnswerDto {
                            question_id: known.id,
                            chosen_index: 0,
                        },
                    ],
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let refreshed = UserRepository::new(db)
            .find_by_id(student.id)
            .await?
            .unwrap();
        assert_eq!(refreshed.gold, 0);

        Ok(())
    }

    /// Tests a submission answering only part of the quiz.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn partial_submission_is_rejected() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_stage_tables()
            .with_table(DailyTask)
            .with_table(DailyTaskProgress)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
        let (_, unit) = factory::helpers::create_unit_with_subject(db).await?;
        let student_model = factory::create_student(db).await?;
        ClassRepository::new(db)
            .add_student(class.id, student_model.id)
            .await?;

        let known = factory::create_question(db, unit.id).await?;
        factory::create_question(db, unit.id).await?;

        let stage = factory::stage::StageFactory::new(db, class.id)
            .pass_threshold(50)
            .question_count(2)
            .build()
            .await?;
        StageRepository::new(db).set_units(stage.id, &[unit.id]).await?;

        let student = User::from_entity(student_model);
        let result = StageService::new(db)
            .submit(
                &student,
                stage.id,
                SubmitStageDto {
                    answers: vec![StageAnswerDto {
                        question_id: known.id,
                        chosen_index: 0,
                    }],
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests submitting to a sequentially locked stage.
    ///
    /// Expected: Err(BadRequest) without touching progress
    #[tokio::test]
    async fn locked_stage_rejects_submission() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_stage_tables()
            .with_table(DailyTask)
            .with_table(DailyTaskProgress)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, class) = factory::helpers::create_class_with_teacher(db).await?;
        let (_, unit) = factory::helpers::create_unit_with_subject(db).await?;
        let student_model = factory::create_student(db).await?;
        ClassRepository::new(db)
            .add_student(class.id, student_model.id)
            .await?;

        let question = factory::create_question(db, unit.id).await?;
        factory::stage::StageFactory::new(db, class.id)
            .sort_order(0)
            .build()
            .await?;
        let second = factory::stage::StageFactory::new(db, class.id)
            .sort_order(1)
            .build()
            .await?;
        StageRepository::new(db).set_units(second.id, &[unit.id]).await?;

        let student = User::from_entity(student_model);
        let result = StageService::new(db)
            .submit(
                &student,
                second.id,
                SubmitStageDto {
                    answers: vec![StageAnswerDto {
                        question_id: question.id,
                        chosen_index: 0,
                    }],
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }
}
