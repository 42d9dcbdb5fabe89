//! Announcement domain model and operation parameters.

use chrono::NaiveDateTime;

use crate::model::announcement::AnnouncementDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: i32,
    pub class_id: i32,
    pub author_id: i32,
    pub title: String,
    pub body: String,
    pub pinned: bool,
    pub created_at: NaiveDateTime,
}

impl Announcement {
    pub fn from_entity(entity: entity::announcement::Model) -> Self {
        Self {
            id: entity.id,
            class_id: entity.class_id,
            author_id: entity.author_id,
            title: entity.title,
            body: entity.body,
            pinned: entity.pinned,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AnnouncementDto {
        AnnouncementDto {
            id: self.id,
            class_id: self.class_id,
            author_id: self.author_id,
            title: self.title,
            body: self.body,
            pinned: self.pinned,
            created_at: self.created_at,
        }
    }
}

pub struct CreateAnnouncementParam {
    pub class_id: i32,
    pub author_id: i32,
    pub title: String,
    pub body: String,
    pub pinned: bool,
}

pub struct UpdateAnnouncementParam {
    pub title: String,
    pub body: String,
    pub pinned: bool,
}
