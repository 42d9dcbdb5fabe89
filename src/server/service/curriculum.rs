//! Curriculum service: subjects and the units beneath them.
//!
//! Deletes are guarded: a subject with units, or a unit with questions or
//! stage links, refuses deletion so published content never dangles.

use sea_orm::DatabaseConnection;

use crate::{
    model::curriculum::{
        CreateSubjectDto, CreateUnitDto, SubjectDto, UnitDto, UpdateSubjectDto, UpdateUnitDto,
    },
    server::{
        data::{
            question::QuestionRepository, stage::StageRepository, subject::SubjectRepository,
            unit::UnitRepository,
        },
        error::AppError,
        model::curriculum::{
            CreateSubjectParam, CreateUnitParam, UpdateSubjectParam, UpdateUnitParam,
        },
    },
};

pub struct CurriculumService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CurriculumService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_subject(&self, dto: CreateSubjectDto) -> Result<SubjectDto, AppError> {
        let repo = SubjectRepository::new(self.db);

        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest("Subject name is required".to_string()));
        }

        let subject = repo
            .create(CreateSubjectParam {
                name: dto.name.trim().to_string(),
                sort_order: dto.sort_order,
            })
            .await?;

        Ok(subject.into_dto())
    }

    pub async fn get_subjects(&self) -> Result<Vec<SubjectDto>, AppError> {
        let repo = SubjectRepository::new(self.db);

        let subjects = repo.get_all().await?;

        Ok(subjects.into_iter().map(|s| s.into_dto()).collect())
    }

    pub async fn update_subject(
        &self,
        id: i32,
        dto: UpdateSubjectDto,
    ) -> Result<SubjectDto, AppError> {
        let repo = SubjectRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Subject not found".to_string()));
        }

        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest("Subject name is required".to_string()));
        }

        let subject = repo
            .update(
                id,
                UpdateSubjectParam {
                    name: dto.name.trim().to_string(),
                    sort_order: dto.sort_order,
                },
            )
            .await?;

        Ok(subject.into_dto())
    }

    pub async fn delete_subject(&self, id: i32) -> Result<(), AppError> {
        let subject_repo = SubjectRepository::new(self.db);
        let unit_repo = UnitRepository::new(self.db);

        if subject_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Subject not found".to_string()));
        }

        if unit_repo.count_by_subject(id).await? > 0 {
            return Err(AppError::BadRequest(
                "Subject still has units and cannot be deleted".to_string(),
            ));
        }

        subject_repo.delete(id).await?;

        Ok(())
    }

    pub async fn create_unit(&self, dto: CreateUnitDto) -> Result<UnitDto, AppError> {
        let subject_repo = SubjectRepository::new(self.db);
        let unit_repo = UnitRepository::new(self.db);

        if subject_repo.get_by_id(dto.subject_id).await?.is_none() {
            return Err(AppError::NotFound("Subject not found".to_string()));
        }

        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest("Unit name is required".to_string()));
        }

        let unit = unit_repo
            .create(CreateUnitParam {
                subject_id: dto.subject_id,
                name: dto.name.trim().to_string(),
                grade_band: dto.grade_band,
                sort_order: dto.sort_order,
            })
            .await?;

        Ok(unit.into_dto())
    }

    pub async fn get_units(&self, subject_id: i32) -> Result<Vec<UnitDto>, AppError> {
        let subject_repo = SubjectRepository::new(self.db);
        let unit_repo = UnitRepository::new(self.db);

        if subject_repo.get_by_id(subject_id).await?.is_none() {
            return Err(AppError::NotFound("Subject not found".to_string()));
        }

        let units = unit_repo.get_by_subject(subject_id).await?;

        Ok(units.into_iter().map(|u| u.into_dto()).collect())
    }

    pub async fn update_unit(&self, id: i32, dto: UpdateUnitDto) -> Result<UnitDto, AppError> {
        let repo = UnitRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Unit not found".to_string()));
        }

        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest("Unit name is required".to_string()));
        }

        let unit = repo
            .update(
                id,
                UpdateUnitParam {
                    name: dto.name.trim().to_string(),
                    grade_band: dto.grade_band,
                    sort_order: dto.sort_order,
                },
            )
            .await?;

        Ok(unit.into_dto())
    }

    pub async fn delete_unit(&self, id: i32) -> Result<(), AppError> {
        let unit_repo = UnitRepository::new(self.db);
        let question_repo = QuestionRepository::new(self.db);
        let stage_repo = StageRepository::new(self.db);

        if unit_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Unit not found".to_string()));
        }

        if question_repo.count_by_unit(id).await? > 0 {
            return Err(AppError::BadRequest(
                "Unit still has questions and cannot be deleted".to_string(),
            ));
        }

        if stage_repo.count_links_by_unit(id).await? > 0 {
            return Err(AppError::BadRequest(
                "Unit is linked to a stage and cannot be deleted".to_string(),
            ));
        }

        unit_repo.delete(id).await?;

        Ok(())
    }
}
