//! Class data repository for database operations.
//!
//! Handles class records, join code lookups, and the class roster. Membership rows
//! live in the `class_student` junction table and are managed here as well.

use crate::server::model::class::{Class, CreateClassParam, RosterEntry, UpdateClassParam};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ClassRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateClassParam) -> Result<Class, DbErr> {
        let entity = entity::class::ActiveModel {
            name: ActiveValue::Set(param.name),
            join_code: ActiveValue::Set(param.join_code),
            teacher_id: ActiveValue::Set(param.teacher_id),
            archived: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Class::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Class>, DbErr> {
        let entity = entity::prelude::Class::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Class::from_entity))
    }

    /// Gets all classes owned by a teacher, ordered by name.
    pub async fn get_by_teacher(&self, teacher_id: i32) -> Result<Vec<Class>, DbErr> {
        let entities = entity::prelude::Class::find()
            .filter(entity::class::Column::TeacherId.eq(teacher_id))
            .order_by_asc(entity::class::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Class::from_entity).collect())
    }

    pub async fn find_by_join_code(&self, join_code: &str) -> Result<Option<Class>, DbErr> {
        let entity = entity::prelude::Class::find()
            .filter(entity::class::Column::JoinCode.eq(join_code))
            .one(self.db)
            .await?;

        Ok(entity.map(Class::from_entity))
    }

    pub async fn join_code_taken(&self, join_code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Class::find()
            .filter(entity::class::Column::JoinCode.eq(join_code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn update(&self, id: i32, param: UpdateClassParam) -> Result<Class, DbErr> {
        let class = entity::prelude::Class::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Class with id {} not found",
                id
            )))?;

        let mut active_model: entity::class::ActiveModel = class.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.archived = ActiveValue::Set(param.archived);

        let entity = active_model.update(self.db).await?;

        Ok(Class::from_entity(entity))
    }

    /// Replaces a class's join code.
    pub async fn set_join_code(&self, id: i32, join_code: &str) -> Result<Class, DbErr> {
        let class = entity::prelude::Class::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Class with id {} not found",
                id
            )))?;

        let mut active_model: entity::class::ActiveModel = class.into();
        active_model.join_code = ActiveValue::Set(join_code.to_string());

        let entity = active_model.update(self.db).await?;

        Ok(Class::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ClassStudent::delete_many()
            .filter(entity::class_student::Column::ClassId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Class::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Adds a student to a class. Joining a class twice is a no-op.
    pub async fn add_student(&self, class_id: i32, student_id: i32) -> Result<(), DbErr> {
        entity::prelude::ClassStudent::insert(entity::class_student::ActiveModel {
            class_id: ActiveValue::Set(class_id),
            student_id: ActiveValue::Set(student_id),
            joined_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::class_student::Column::ClassId,
                entity::class_student::Column::StudentId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Removes a student from a class. Removing a non-member is a no-op.
    pub async fn remove_student(&self, class_id: i32, student_id: i32) -> Result<(), DbErr> {
        entity::prelude::ClassStudent::delete_many()
            .filter(entity::class_student::Column::ClassId.eq(class_id))
            .filter(entity::class_student::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn is_member(&self, class_id: i32, student_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ClassStudent::find()
            .filter(entity::class_student::Column::ClassId.eq(class_id))
            .filter(entity::class_student::Column::StudentId.eq(student_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the roster of a class with each student's gold and exp, ordered by
    /// display name.
    pub async fn get_roster(&self, class_id: i32) -> Result<Vec<RosterEntry>, DbErr> {
        let rows = entity::prelude::ClassStudent::find()
            .filter(entity::class_student::Column::ClassId.eq(class_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::user::Column::DisplayName)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(membership, student)| {
                student.map(|student| RosterEntry {
                    student_id: student.id,
                    display_name: student.display_name,
                    gold: student.gold,
                    exp: student.exp,
                    joined_at: membership.joined_at,
                })
            })
            .collect())
    }

    /// Gets all classes a student has joined, ordered by name.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<Class>, DbErr> {
        let rows = entity::prelude::ClassStudent::find()
            .filter(entity::class_student::Column::StudentId.eq(student_id))
            .find_also_related(entity::prelude::Class)
            .order_by_asc(entity::class::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, class)| class.map(Class::from_entity))
            .collect())
    }

    /// Gets the ids of all students in a class.
    pub async fn get_student_ids(&self, class_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::ClassStudent::find()
            .filter(entity::class_student::Column::ClassId.eq(class_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.student_id).collect())
    }
}
