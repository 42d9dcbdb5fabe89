//! Report service: teacher-facing progress aggregates.
//!
//! Raw attempt and progress rows are fetched per class or student and folded
//! in memory; class sizes in this domain stay small enough that grouped SQL
//! buys nothing over a single pass here.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    model::report::{ClassReportDto, ClassUnitReportDto, StudentReportDto},
    server::{
        data::{
            class::ClassRepository, question_attempt::QuestionAttemptRepository,
            stage_progress::StageProgressRepository, unit::UnitRepository,
        },
        error::AppError,
        model::{
            report::{StudentReportRow, UnitReportRow},
            user::User,
        },
    },
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Per-student attempt counts, correct rates, clears, and levels for one
    /// class. Students with no attempts report a rate of 0.
    pub async fn class_report(
        &self,
        teacher: &User,
        class_id: i32,
    ) -> Result<ClassReportDto, AppError> {
        let class_repo = ClassRepository::new(self.db);
        let attempt_repo = QuestionAttemptRepository::new(self.db);
        let progress_repo = StageProgressRepository::new(self.db);

        self.owned_class(teacher, class_id).await?;

        let roster = class_repo.get_roster(class_id).await?;
        let student_ids: Vec<i32> = roster.iter().map(|entry| entry.student_id).collect();

        let mut attempts: HashMap<i32, (u64, u64)> = HashMap::new();
        for attempt in attempt_repo.get_by_students(&student_ids).await? {
            let entry = attempts.entry(attempt.student_id).or_default();
            entry.0 += 1;
            if attempt.correct {
                entry.1 += 1;
            }
        }

        let mut cleared: HashMap<i32, u64> = HashMap::new();
        for progress in progress_repo.get_cleared_by_students(&student_ids).await? {
            *cleared.entry(progress.student_id).or_default() += 1;
        }

        let rows = roster
            .into_iter()
            .map(|entry| {
                let (total, correct) = attempts
                    .get(&entry.student_id)
                    .copied()
                    .unwrap_or((0, 0));

                StudentReportRow {
                    student_id: entry.student_id,
                    display_name: entry.display_name,
                    exp: entry.exp,
                    attempts: total,
                    correct,
                    stages_cleared: cleared.get(&entry.student_id).copied().unwrap_or(0),
                }
                .into_dto()
            })
            .collect();

        Ok(ClassReportDto { class_id, rows })
    }

    /// Per-unit breakdown for one student across all their attempts.
    pub async fn student_report(
        &self,
        teacher: &User,
        student_id: i32,
    ) -> Result<StudentReportDto, AppError> {
        let class_repo = ClassRepository::new(self.db);
        let attempt_repo = QuestionAttemptRepository::new(self.db);

        // The student must sit in one of the caller's classes.
        let mut taught = false;
        for class in class_repo.get_by_teacher(teacher.id).await? {
            if class_repo.is_member(class.id, student_id).await? {
                taught = true;
                break;
            }
        }
        if !taught {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        let attempts = attempt_repo.get_with_units_by_students(&[student_id]).await?;
        let rows = self.fold_unit_rows(attempts).await?;

        Ok(StudentReportDto { student_id, rows })
    }

    /// Class-wide per-unit correct rates.
    pub async fn class_unit_report(
        &self,
        teacher: &User,
        class_id: i32,
    ) -> Result<ClassUnitReportDto, AppError> {
        let class_repo = ClassRepository::new(self.db);
        let attempt_repo = QuestionAttemptRepository::new(self.db);

        self.owned_class(teacher, class_id).await?;

        let student_ids = class_repo.get_student_ids(class_id).await?;
        let attempts = attempt_repo.get_with_units_by_students(&student_ids).await?;
        let rows = self.fold_unit_rows(attempts).await?;

        Ok(ClassUnitReportDto { class_id, rows })
    }

    async fn fold_unit_rows(
        &self,
        attempts: Vec<(i32, crate::server::model::question::QuestionAttempt)>,
    ) -> Result<Vec<crate::model::report::UnitReportRowDto>, AppError> {
        let unit_repo = UnitRepository::new(self.db);

        let mut per_unit: HashMap<i32, (u64, u64)> = HashMap::new();
        for (unit_id, attempt) in attempts {
            let entry = per_unit.entry(unit_id).or_default();
            entry.0 += 1;
            if attempt.correct {
                entry.1 += 1;
            }
        }

        let unit_ids: Vec<i32> = per_unit.keys().copied().collect();
        let units = unit_repo.get_by_ids(&unit_ids).await?;

        let mut rows: Vec<_> = units
            .into_iter()
            .map(|unit| {
                let (attempts, correct) = per_unit.get(&unit.id).copied().unwrap_or((0, 0));
                UnitReportRow {
                    unit_id: unit.id,
                    unit_name: unit.name,
                    attempts,
                    correct,
                }
                .into_dto()
            })
            .collect();
        rows.sort_by_key(|row| row.unit_id);

        Ok(rows)
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
}
