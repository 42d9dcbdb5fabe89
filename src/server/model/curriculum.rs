//! Subject and unit domain models and operation parameters.

use crate::model::curriculum::{SubjectDto, UnitDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: i32,
    pub name: String,
    pub sort_order: i32,
}

impl Subject {
    pub fn from_entity(entity: entity::subject::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            sort_order: entity.sort_order,
        }
    }

    pub fn into_dto(self) -> SubjectDto {
        SubjectDto {
            id: self.id,
            name: self.name,
            sort_order: self.sort_order,
        }
    }
}

pub struct CreateSubjectParam {
    pub name: String,
    pub sort_order: i32,
}

pub struct UpdateSubjectParam {
    pub name: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: i32,
    pub subject_id: i32,
    pub name: String,
    pub grade_band: String,
    pub sort_order: i32,
}

impl Unit {
    pub fn from_entity(entity: entity::unit::Model) -> Self {
        Self {
            id: entity.id,
            subject_id: entity.subject_id,
            name: entity.name,
            grade_band: entity.grade_band,
            sort_order: entity.sort_order,
        }
    }

    pub fn into_dto(self) -> UnitDto {
        UnitDto {
            id: self.id,
            subject_id: self.subject_id,
            name: self.name,
            grade_band: self.grade_band,
            sort_order: self.sort_order,
        }
    }
}

pub struct CreateUnitParam {
    pub subject_id: i32,
    pub name: String,
    pub grade_band: String,
    pub sort_order: i32,
}

pub struct UpdateUnitParam {
    pub name: String,
    pub grade_band: String,
    pub sort_order: i32,
}
