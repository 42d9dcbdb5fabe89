//! Daily task domain models and operation parameters.

use chrono::NaiveDate;
use entity::daily_task::DailyTaskKind;
use sea_orm::ActiveEnum;

use crate::model::daily_task::{DailyTaskDto, DailyTaskStatusDto};

#[derive(Debug, Clone, PartialEq)]
pub struct DailyTask {
    pub id: i32,
    pub kind: DailyTaskKind,
    pub target: i32,
    pub reward_gold: i32,
}

impl DailyTask {
    pub fn from_entity(entity: entity::daily_task::Model) -> Self {
        Self {
            id: entity.id,
            kind: entity.kind,
            target: entity.target,
            reward_gold: entity.reward_gold,
        }
    }

    pub fn into_dto(self) -> DailyTaskDto {
        DailyTaskDto {
            id: self.id,
            kind: self.kind.to_value(),
            target: self.target,
            reward_gold: self.reward_gold,
        }
    }
}

pub struct CreateDailyTaskParam {
    pub kind: DailyTaskKind,
    pub target: i32,
    pub reward_gold: i32,
}

pub struct UpdateDailyTaskParam {
    pub target: i32,
    pub reward_gold: i32,
}

/// A task with today's progress for one student.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTaskStatus {
    pub task: DailyTask,
    pub count: i32,
    pub claimed: bool,
}

impl DailyTaskStatus {
    pub fn into_dto(self) -> DailyTaskStatusDto {
        let claimable = !self.claimed && self.count >= self.task.target;
        DailyTaskStatusDto {
            task: self.task.into_dto(),
            count: self.count,
            claimed: self.claimed,
            claimable,
        }
    }
}

/// One progress row: a student's count toward one task on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTaskProgress {
    pub task_id: i32,
    pub student_id: i32,
    pub task_date: NaiveDate,
    pub count: i32,
    pub claimed: bool,
}

impl DailyTaskProgress {
    pub fn from_entity(entity: entity::daily_task_progress::Model) -> Self {
        Self {
            task_id: entity.task_id,
            student_id: entity.student_id,
            task_date: entity.task_date,
            count: entity.count,
            claimed: entity.claimed,
        }
    }
}
