//! Announcement service: class notice board, pinned posts first.

use sea_orm::DatabaseConnection;

use crate::{
    model::announcement::{
        AnnouncementDto, CreateAnnouncementDto, PaginatedAnnouncementsDto, UpdateAnnouncementDto,
    },
    server::{
        data::{announcement::AnnouncementRepository, class::ClassRepository},
        error::AppError,
        model::{
            announcement::{Announcement, CreateAnnouncementParam, UpdateAnnouncementParam},
            user::User,
        },
    },
};

pub struct AnnouncementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        teacher: &User,
        class_id: i32,
        dto: CreateAnnouncementDto,
    ) -> Result<AnnouncementDto, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        self.owned_class(teacher, class_id).await?;

        if dto.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }

        let announcement = repo
            .create(CreateAnnouncementParam {
                class_id,
                author_id: teacher.id,
                title: dto.title.trim().to_string(),
                body: dto.body,
                pinned: dto.pinned,
            })
            .await?;

        Ok(announcement.into_dto())
    }

    /// Class feed readable by the owning teacher and enrolled students.
    pub async fn get_by_class_paginated(
        &self,
        user: &User,
        class_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedAnnouncementsDto, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        self.require_access(user, class_id).await?;

        let (announcements, total) = repo
            .get_by_class_paginated(class_id, page, per_page)
            .await?;

        Ok(PaginatedAnnouncementsDto {
            announcements: announcements
                .into_iter()
                .map(|announcement| announcement.into_dto())
                .collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    pub async fn update(
        &self,
        teacher: &User,
        id: i32,
        dto: UpdateAnnouncementDto,
    ) -> Result<AnnouncementDto, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        self.owned_announcement(teacher, id).await?;

        if dto.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }

        let announcement = repo
            .update(
                id,
                UpdateAnnouncementParam {
                    title: dto.title.trim().to_string(),
                    body: dto.body,
                    pinned: dto.pinned,
                },
            )
            .await?;

        Ok(announcement.into_dto())
    }

    pub async fn delete(&self, teacher: &User, id: i32) -> Result<(), AppError> {
        let repo = AnnouncementRepository::new(self.db);

        self.owned_announcement(teacher, id).await?;
        repo.delete(id).await?;

        Ok(())
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

    async fn require_access(&self, user: &User, class_id: i32) -> Result<(), AppError> {
        let class_repo = ClassRepository::new(self.db);

        let Some(class) = class_repo.get_by_id(class_id).await? else {
            return Err(AppError::NotFound("Class not found".to_string()));
        };

        if class.teacher_id == user.id || class_repo.is_member(class_id, user.id).await? {
            return Ok(());
        }

        Err(AppError::NotFound("Class not found".to_string()))
    }

    async fn owned_announcement(&self, teacher: &User, id: i32) -> Result<Announcement, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        let Some(announcement) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Announcement not found".to_string()));
        };

        self.owned_class(teacher, announcement.class_id).await?;

        Ok(announcement)
    }
}
