use crate::server::model::announcement::{
    Announcement, CreateAnnouncementParam, UpdateAnnouncementParam,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct AnnouncementRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnnouncementRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAnnouncementParam) -> Result<Announcement, DbErr> {
        let entity = entity::announcement::ActiveModel {
            class_id: ActiveValue::Set(param.class_id),
            author_id: ActiveValue::Set(param.author_id),
            title: ActiveValue::Set(param.title),
            body: ActiveValue::Set(param.body),
            pinned: ActiveValue::Set(param.pinned),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Announcement::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Announcement>, DbErr> {
        let entity = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Announcement::from_entity))
    }

    /// Gets paginated announcements for a class, pinned first, then newest.
    pub async fn get_by_class_paginated(
        &self,
        class_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Announcement>, u64), DbErr> {
        let paginator = entity::prelude::Announcement::find()
            .filter(entity::announcement::Column::ClassId.eq(class_id))
            .order_by_desc(entity::announcement::Column::Pinned)
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let announcements = entities.into_iter().map(Announcement::from_entity).collect();

        Ok((announcements, total))
    }

    pub async fn update(&self, id: i32, param: UpdateAnnouncementParam) -> Result<Announcement, DbErr> {
        let announcement = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Announcement with id {} not found",
                id
            )))?;

        let mut active_model: entity::announcement::ActiveModel = announcement.into();
        active_model.title = ActiveValue::Set(param.title);
        active_model.body = ActiveValue::Set(param.body);
        active_model.pinned = ActiveValue::Set(param.pinned);

        let entity = active_model.update(self.db).await?;

        Ok(Announcement::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Announcement::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
