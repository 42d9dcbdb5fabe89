//! Class domain models and operation parameters.

use chrono::NaiveDateTime;

use crate::{
    model::class::{ClassDto, RosterEntryDto},
    server::model::user::level_for_exp,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub id: i32,
    pub name: String,
    pub join_code: String,
    pub teacher_id: i32,
    pub archived: bool,
    pub created_at: NaiveDateTime,
}

impl Class {
    pub fn from_entity(entity: entity::class::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            join_code: entity.join_code,
            teacher_id: entity.teacher_id,
            archived: entity.archived,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ClassDto {
        ClassDto {
            id: self.id,
            name: self.name,
            join_code: self.join_code,
            archived: self.archived,
            created_at: self.created_at,
        }
    }
}

pub struct CreateClassParam {
    pub name: String,
    pub join_code: String,
    pub teacher_id: i32,
}

pub struct UpdateClassParam {
    pub name: String,
    pub archived: bool,
}

/// One student line in a class roster.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub student_id: i32,
    pub display_name: String,
    pub gold: i32,
    pub exp: i32,
    pub joined_at: NaiveDateTime,
}

impl RosterEntry {
    pub fn into_dto(self) -> RosterEntryDto {
        RosterEntryDto {
            student_id: self.student_id,
            display_name: self.display_name,
            level: level_for_exp(self.exp),
            gold: self.gold,
            joined_at: self.joined_at,
        }
    }
}
