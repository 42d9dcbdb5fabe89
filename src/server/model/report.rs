//! Reporting aggregate rows.
//!
//! These models carry the output of grouped aggregation queries in the report
//! repository. Correct rate is an integer percent and reports 0 when a group
//! has no attempts.

use crate::{
    model::report::{StudentReportRowDto, UnitReportRowDto},
    server::model::user::level_for_exp,
};

/// Integer percent of correct attempts; 0 when there were none.
pub fn correct_rate(correct: u64, attempts: u64) -> i16 {
    if attempts == 0 {
        return 0;
    }
    ((correct * 100) / attempts) as i16
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentReportRow {
    pub student_id: i32,
    pub display_name: String,
    pub exp: i32,
    pub attempts: u64,
    pub correct: u64,
    pub stages_cleared: u64,
}

impl StudentReportRow {
    pub fn into_dto(self) -> StudentReportRowDto {
        StudentReportRowDto {
            student_id: self.student_id,
            display_name: self.display_name,
            attempts: self.attempts,
            correct_rate: correct_rate(self.correct, self.attempts),
            stages_cleared: self.stages_cleared,
            level: level_for_exp(self.exp),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitReportRow {
    pub unit_id: i32,
    pub unit_name: String,
    pub attempts: u64,
    pub correct: u64,
}

impl UnitReportRow {
    pub fn into_dto(self) -> UnitReportRowDto {
        UnitReportRowDto {
            unit_id: self.unit_id,
            unit_name: self.unit_name,
            attempts: self.attempts,
            correct_rate: correct_rate(self.correct, self.attempts),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn correct_rate_with_no_attempts_is_zero() {
        assert_eq!(correct_rate(0, 0), 0);
    }

    #[test]
    fn correct_rate_rounds_down() {
        assert_eq!(correct_rate(1, 3), 33);
        assert_eq!(correct_rate(3, 3), 100);
    }
}
