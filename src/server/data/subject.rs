use crate::server::model::curriculum::{CreateSubjectParam, Subject, UpdateSubjectParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

pub struct SubjectRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubjectRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateSubjectParam) -> Result<Subject, DbErr> {
        let entity = entity::subject::ActiveModel {
            name: ActiveValue::Set(param.name),
            sort_order: ActiveValue::Set(param.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Subject::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Subject>, DbErr> {
        let entity = entity::prelude::Subject::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Subject::from_entity))
    }

    /// Gets all subjects ordered by sort order, then name.
    pub async fn get_all(&self) -> Result<Vec<Subject>, DbErr> {
        let entities = entity::prelude::Subject::find()
            .order_by_asc(entity::subject::Column::SortOrder)
            .order_by_asc(entity::subject::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Subject::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: UpdateSubjectParam) -> Result<Subject, DbErr> {
        let subject = entity::prelude::Subject::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Subject with id {} not found",
                id
            )))?;

        let mut active_model: entity::subject::ActiveModel = subject.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.sort_order = ActiveValue::Set(param.sort_order);

        let entity = active_model.update(self.db).await?;

        Ok(Subject::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Subject::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
