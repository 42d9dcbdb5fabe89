//! Stage domain models, progress, and the unlock rule engine.

use chrono::NaiveDateTime;
use entity::stage::UnlockRule;
use sea_orm::ActiveEnum;
use std::collections::HashMap;

use crate::model::stage::{StageDto, StageStatusDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub id: i32,
    pub class_id: i32,
    pub name: String,
    pub sort_order: i32,
    pub unlock_rule: UnlockRule,
    pub min_level: i32,
    pub dependency_stage_id: Option<i32>,
    pub pass_threshold: i16,
    pub question_count: i16,
    pub reward_gold: i32,
    pub reward_exp: i32,
}

impl Stage {
    pub fn from_entity(entity: entity::stage::Model) -> Self {
        Self {
            id: entity.id,
            class_id: entity.class_id,
            name: entity.name,
            sort_order: entity.sort_order,
            unlock_rule: entity.unlock_rule,
            min_level: entity.min_level,
            dependency_stage_id: entity.dependency_stage_id,
            pass_threshold: entity.pass_threshold,
            question_count: entity.question_count,
            reward_gold: entity.reward_gold,
            reward_exp: entity.reward_exp,
        }
    }

    pub fn into_dto(self, unit_ids: Vec<i32>) -> StageDto {
        StageDto {
            id: self.id,
            class_id: self.class_id,
            name: self.name,
            sort_order: self.sort_order,
            unlock_rule: self.unlock_rule.to_value(),
            min_level: self.min_level,
            dependency_stage_id: self.dependency_stage_id,
            pass_threshold: self.pass_threshold,
            question_count: self.question_count,
            reward_gold: self.reward_gold,
            reward_exp: self.reward_exp,
            unit_ids,
        }
    }

    /// Evaluates the unlock rule for one student.
    ///
    /// # Arguments
    /// - `ordered` - All stages of the class ordered by `sort_order`
    /// - `cleared` - Stage ids the student has cleared, keyed by stage id
    /// - `student_level` - The student's current level
    ///
    /// # Returns
    /// - `true` - The stage is playable for this student
    pub fn is_unlocked(
        &self,
        ordered: &[Stage],
        cleared: &HashMap<i32, bool>,
        student_level: i32,
    ) -> bool {
        match self.unlock_rule {
            UnlockRule::Sequential => {
                let previous = ordered
                    .iter()
                    .take_while(|stage| stage.id != self.id)
                    .last();

                // The first stage of a class is always open
                match previous {
                    Some(previous) => cleared.get(&previous.id).copied().unwrap_or(false),
                    None => true,
                }
            }
            UnlockRule::MinLevel => student_level >= self.min_level,
            UnlockRule::Dependency => match self.dependency_stage_id {
                Some(dependency) => cleared.get(&dependency).copied().unwrap_or(false),
                None => true,
            },
        }
    }
}

pub struct CreateStageParam {
    pub class_id: i32,
    pub name: String,
    pub sort_order: i32,
    pub unlock_rule: UnlockRule,
    pub min_level: i32,
    pub dependency_stage_id: Option<i32>,
    pub pass_threshold: i16,
    pub question_count: i16,
    pub reward_gold: i32,
    pub reward_exp: i32,
}

pub struct UpdateStageParam {
    pub name: String,
    pub sort_order: i32,
    pub unlock_rule: UnlockRule,
    pub min_level: i32,
    pub dependency_stage_id: Option<i32>,
    pub pass_threshold: i16,
    pub question_count: i16,
    pub reward_gold: i32,
    pub reward_exp: i32,
}

/// Per-student record of stage completion state and best score.
#[derive(Debug, Clone, PartialEq)]
pub struct StageProgress {
    pub stage_id: i32,
    pub student_id: i32,
    pub best_score: i16,
    pub cleared: bool,
    pub first_cleared_at: Option<NaiveDateTime>,
    pub attempts: i32,
}

impl StageProgress {
    pub fn from_entity(entity: entity::stage_progress::Model) -> Self {
        Self {
            stage_id: entity.stage_id,
            student_id: entity.student_id,
            best_score: entity.best_score,
            cleared: entity.cleared,
            first_cleared_at: entity.first_cleared_at,
            attempts: entity.attempts,
        }
    }
}

/// A stage paired with its computed lock state for one student.
#[derive(Debug, Clone, PartialEq)]
pub struct StageStatus {
    pub stage: Stage,
    pub locked: bool,
    pub cleared: bool,
    pub best_score: i16,
}

impl StageStatus {
    pub fn into_dto(self) -> StageStatusDto {
        StageStatusDto {
            id: self.stage.id,
            name: self.stage.name,
            sort_order: self.stage.sort_order,
            pass_threshold: self.stage.pass_threshold,
            reward_gold: self.stage.reward_gold,
            reward_exp: self.stage.reward_exp,
            locked: self.locked,
            cleared: self.cleared,
            best_score: self.best_score,
        }
    }
}

/// Outcome of one stage submission.
#[derive(Debug, Clone, PartialEq)]
pub struct StageResult {
    pub score: i16,
    pub passed: bool,
    pub first_clear: bool,
    pub reward_gold: i32,
    pub reward_exp: i32,
}

/// Integer percent score for a set of graded answers.
///
/// An empty submission scores 0 rather than dividing by zero.
pub fn score_percent(correct: usize, total: usize) -> i16 {
    if total == 0 {
        return 0;
    }
    ((correct * 100) / total) as i16
}

#[cfg(test)]
mod test {
    use super::*;

    fn stage(id: i32, sort_order: i32, rule: UnlockRule) -> Stage {
        Stage {
            id,
            class_id: 1,
            name: format!("Stage {}", id),
            sort_order,
            unlock_rule: rule,
            min_level: 1,
            dependency_stage_id: None,
            pass_threshold: 70,
            question_count: 5,
            reward_gold: 10,
            reward_exp: 50,
        }
    }

    #[test]
    fn first_sequential_stage_is_unlocked() {
        let stages = vec![stage(1, 0, UnlockRule::Sequential)];
        assert!(stages[0].is_unlocked(&stages, &HashMap::new(), 1));
    }

    #[test]
    fn sequential_stage_locked_until_previous_cleared() {
        let stages = vec![
            stage(1, 0, UnlockRule::Sequential),
            stage(2, 1, UnlockRule::Sequential),
        ];

        let mut cleared = HashMap::new();
        assert!(!stages[1].is_unlocked(&stages, &cleared, 1));

        cleared.insert(1, true);
        assert!(stages[1].is_unlocked(&stages, &cleared, 1));
    }

    #[test]
    fn min_level_stage_compares_student_level() {
        let mut gated = stage(3, 2, UnlockRule::MinLevel);
        gated.min_level = 5;
        let stages = vec![gated.clone()];

        assert!(!gated.is_unlocked(&stages, &HashMap::new(), 4));
        assert!(gated.is_unlocked(&stages, &HashMap::new(), 5));
    }

    #[test]
    fn dependency_stage_requires_referenced_clear() {
        let mut dependent = stage(4, 3, UnlockRule::Dependency);
        dependent.dependency_stage_id = Some(2);
        let stages = vec![stage(2, 1, UnlockRule::Sequential), dependent.clone()];

        let mut cleared = HashMap::new();
        assert!(!dependent.is_unlocked(&stages, &cleared, 1));

        cleared.insert(2, true);
        assert!(dependent.is_unlocked(&stages, &cleared, 1));
    }

    #[test]
    fn score_percent_rounds_down() {
        assert_eq!(score_percent(0, 0), 0);
        assert_eq!(score_percent(2, 3), 66);
        assert_eq!(score_percent(3, 3), 100);
    }
}
