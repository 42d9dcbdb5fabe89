use crate::server::model::curriculum::{CreateUnitParam, Unit, UpdateUnitParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct UnitRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UnitRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateUnitParam) -> Result<Unit, DbErr> {
        let entity = entity::unit::ActiveModel {
            subject_id: ActiveValue::Set(param.subject_id),
            name: ActiveValue::Set(param.name),
            grade_band: ActiveValue::Set(param.grade_band),
            sort_order: ActiveValue::Set(param.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Unit::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Unit>, DbErr> {
        let entity = entity::prelude::Unit::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Unit::from_entity))
    }

    /// Gets all units of a subject ordered by sort order, then name.
    pub async fn get_by_subject(&self, subject_id: i32) -> Result<Vec<Unit>, DbErr> {
        let entities = entity::prelude::Unit::find()
            .filter(entity::unit::Column::SubjectId.eq(subject_id))
            .order_by_asc(entity::unit::Column::SortOrder)
            .order_by_asc(entity::unit::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Unit::from_entity).collect())
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Unit>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Unit::find()
            .filter(entity::unit::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Unit::from_entity).collect())
    }

    /// Counts units belonging to a subject. Used by the subject delete guard.
    pub async fn count_by_subject(&self, subject_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Unit::find()
            .filter(entity::unit::Column::SubjectId.eq(subject_id))
            .count(self.db)
            .await
    }

    pub async fn update(&self, id: i32, param: UpdateUnitParam) -> Result<Unit, DbErr> {
        let unit = entity::prelude::Unit::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Unit with id {} not found",
                id
            )))?;

        let mut active_model: entity::unit::ActiveModel = unit.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.grade_band = ActiveValue::Set(param.grade_band);
        active_model.sort_order = ActiveValue::Set(param.sort_order);

        let entity = active_model.update(self.db).await?;

        Ok(Unit::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Unit::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
