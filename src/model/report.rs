use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-student aggregate line in the class report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentReportRowDto {
    pub student_id: i32,
    pub display_name: String,
    pub attempts: u64,
    /// Integer percent of attempts answered correctly; 0 when no attempts.
    pub correct_rate: i16,
    pub stages_cleared: u64,
    pub level: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassReportDto {
    pub class_id: i32,
    pub rows: Vec<StudentReportRowDto>,
}

/// Per-unit aggregate line, used both for a single student and class-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UnitReportRowDto {
    pub unit_id: i32,
    pub unit_name: String,
    pub attempts: u64,
    pub correct_rate: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentReportDto {
    pub student_id: i32,
    pub rows: Vec<UnitReportRowDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassUnitReportDto {
    pub class_id: i32,
    pub rows: Vec<UnitReportRowDto>,
}
