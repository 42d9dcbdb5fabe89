//! Daily task service: definitions, per-day progress, and reward claims.
//!
//! Progress is written as a side effect of gameplay: answering questions,
//! clearing stages, and logging in each feed the matching task kind through
//! `record_event`. Claims pay out once per task per UTC day.

use chrono::Utc;
use entity::daily_task::DailyTaskKind;
use sea_orm::{
    ActiveEnum, ConnectionTrait, DatabaseConnection, DbErr, TransactionError, TransactionTrait,
};
use std::collections::HashMap;

use crate::{
    model::daily_task::{
        ClaimResultDto, CreateDailyTaskDto, DailyTaskDto, DailyTaskStatusDto, UpdateDailyTaskDto,
    },
    server::{
        data::{daily_task::DailyTaskRepository, user::UserRepository},
        error::AppError,
        model::{
            daily_task::{CreateDailyTaskParam, DailyTaskStatus, UpdateDailyTaskParam},
            user::User,
        },
    },
};

/// Counts one game event toward every task of the matching kind for today.
///
/// Runs against whatever connection the caller holds, so stage submissions can
/// fold the increment into their reward transaction.
pub async fn record_event<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    kind: DailyTaskKind,
) -> Result<(), DbErr> {
    let repo = DailyTaskRepository::new(db);
    let today = Utc::now().date_naive();

    for task in repo.get_by_kind(kind).await? {
        repo.increment_progress(task.id, student_id, today, 1)
            .await?;
    }

    Ok(())
}

pub struct DailyTaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DailyTaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateDailyTaskDto) -> Result<DailyTaskDto, AppError> {
        let repo = DailyTaskRepository::new(self.db);

        let kind = parse_kind(&dto.kind)?;
        validate_task(dto.target, dto.reward_gold)?;

        let task = repo
            .create(CreateDailyTaskParam {
                kind,
                target: dto.target,
                reward_gold: dto.reward_gold,
            })
            .await?;

        Ok(task.into_dto())
    }

    pub async fn get_all(&self) -> Result<Vec<DailyTaskDto>, AppError> {
        let repo = DailyTaskRepository::new(self.db);

        let tasks = repo.get_all().await?;

        Ok(tasks.into_iter().map(|task| task.into_dto()).collect())
    }

    pub async fn update(&self, id: i32, dto: UpdateDailyTaskDto) -> Result<DailyTaskDto, AppError> {
        let repo = DailyTaskRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Daily task not found".to_string()));
        }

        validate_task(dto.target, dto.reward_gold)?;

        let task = repo
            .update(
                id,
                UpdateDailyTaskParam {
                    target: dto.target,
                    reward_gold: dto.reward_gold,
                },
            )
            .await?;

        Ok(task.into_dto())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DailyTaskRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Daily task not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Today's tasks decorated with the calling student's progress.
    pub async fn today(&self, student: &User) -> Result<Vec<DailyTaskStatusDto>, AppError> {
        let repo = DailyTaskRepository::new(self.db);
        let today = Utc::now().date_naive();

        let tasks = repo.get_all().await?;
        let progress: HashMap<i32, _> = repo
            .get_progress_for_date(student.id, today)
            .await?
            .into_iter()
            .map(|row| (row.task_id, row))
            .collect();

        Ok(tasks
            .into_iter()
            .map(|task| {
                let (count, claimed) = progress
                    .get(&task.id)
                    .map(|row| (row.count, row.claimed))
                    .unwrap_or((0, false));

                DailyTaskStatus {
                    task,
                    count,
                    claimed,
                }
                .into_dto()
            })
            .collect())
    }

    /// Claims a task's reward for today.
    ///
    /// The claim flag and the gold credit commit together; a task can pay out
    /// at most once per day.
    pub async fn claim(&self, student: &User, task_id: i32) -> Result<ClaimResultDto, AppError> {
        let student_id = student.id;
        let today = Utc::now().date_naive();

        self.db
            .transaction::<_, ClaimResultDto, AppError>(move |txn| {
                Box::pin(async move {
                    let repo = DailyTaskRepository::new(txn);
                    let user_repo = UserRepository::new(txn);

                    let Some(task) = repo.get_by_id(task_id).await? else {
                        return Err(AppError::NotFound("Daily task not found".to_string()));
                    };

                    let Some(progress) = repo.get_progress(task_id, student_id, today).await?
                    else {
                        return Err(AppError::BadRequest(
                            "Task target not reached".to_string(),
                        ));
                    };

                    if progress.claimed {
                        return Err(AppError::BadRequest("Task already claimed".to_string()));
                    }

                    if progress.count < task.target {
                        return Err(AppError::BadRequest(
                            "Task target not reached".to_string(),
                        ));
                    }

                    repo.mark_claimed(task_id, student_id, today).await?;
                    user_repo.add_rewards(student_id, task.reward_gold, 0).await?;

                    let gold_remaining = user_repo
                        .find_by_id(student_id)
                        .await?
                        .map(|user| user.gold)
                        .unwrap_or(0);

                    Ok(ClaimResultDto {
                        reward_gold: task.reward_gold,
                        gold_remaining,
                    })
                })
            })
            .await
            .map_err(flatten_transaction_error)
    }
}

/// Unwraps transaction plumbing so service errors keep their status mapping.
pub(crate) fn flatten_transaction_error(err: TransactionError<AppError>) -> AppError {
    match err {
        TransactionError::Connection(err) => AppError::DbErr(err),
        TransactionError::Transaction(err) => err,
    }
}

fn parse_kind(kind: &str) -> Result<DailyTaskKind, AppError> {
    DailyTaskKind::try_from_value(&kind.to_string())
        .map_err(|_| AppError::BadRequest("Unknown task kind".to_string()))
}

fn validate_task(target: i32, reward_gold: i32) -> Result<(), AppError> {
    if target < 1 {
        return Err(AppError::BadRequest(
            "Task target must be at least 1".to_string(),
        ));
    }

    if reward_gold < 0 {
        return Err(AppError::BadRequest(
            "Task reward must not be negative".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[test]
    fn parses_known_task_kinds() {
        assert_eq!(
            parse_kind("answer_questions").unwrap(),
            DailyTaskKind::AnswerQuestions
        );
        assert_eq!(parse_kind("clear_stage").unwrap(), DailyTaskKind::ClearStage);
        assert_eq!(parse_kind("login").unwrap(), DailyTaskKind::Login);
        assert!(parse_kind("feed_pet").is_err());
    }

    #[test]
    fn rejects_invalid_task_settings() {
        assert!(validate_task(0, 10).is_err());
        assert!(validate_task(3, -1).is_err());
        assert!(validate_task(3, 0).is_ok());
    }

    /// Tests claiming a completed task, then claiming it again.
    ///
    /// Expected: the first claim pays the reward, the second returns
    /// Err(BadRequest) and the gold stays put
    #[tokio::test]
    async fn claim_pays_reward_once() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_daily_task_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let student_model = factory::create_student(db).await?;
        let task = factory::daily_task::DailyTaskFactory::new(db)
            .target(2)
            .reward_gold(25)
            .build()
            .await?;

        let today = Utc::now().date_naive();
        DailyTaskRepository::new(db)
            .increment_progress(task.id, student_model.id, today, 2)
            .await?;

        let student = User::from_entity(student_model);
        let service = DailyTaskService::new(db);

        let claim = service.claim(&student, task.id).await?;
        assert_eq!(claim.reward_gold, 25);
        assert_eq!(claim.gold_remaining, 25);

        let retry = service.claim(&student, task.id).await;
        assert!(matches!(retry, Err(AppError::BadRequest(_))));

        let refreshed = UserRepository::new(db)
            .find_by_id(student.id)
            .await?
            .unwrap();
        assert_eq!(refreshed.gold, 25);

        Ok(())
    }

    /// Tests claiming a task whose target is not yet reached.
    ///
    /// Expected: Err(BadRequest) and no gold credited
    #[tokio::test]
    async fn claim_below_target_is_rejected() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_daily_task_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let student_model = factory::create_student(db).await?;
        let task = factory::daily_task::DailyTaskFactory::new(db)
            .target(3)
            .reward_gold(25)
            .build()
            .await?;

        let today = Utc::now().date_naive();
        DailyTaskRepository::new(db)
            .increment_progress(task.id, student_model.id, today, 1)
            .await?;

        let student = User::from_entity(student_model);
        let result = DailyTaskService::new(db).claim(&student, task.id).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let refreshed = UserRepository::new(db)
            .find_by_id(student.id)
            .await?
            .unwrap();
        assert_eq!(refreshed.gold, 0);

        Ok(())
    }
}
