//! Shop item data repository. Items are soft deleted so owned copies stay resolvable.

use crate::server::model::shop::{CreateItemParam, Item, UpdateItemParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct ItemRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateItemParam) -> Result<Item, DbErr> {
        let entity = entity::item::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            category: ActiveValue::Set(param.category),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Item::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Item>, DbErr> {
        let entity = entity::prelude::Item::find_by_id(id)
            .filter(entity::item::Column::Deleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Item::from_entity))
    }

    /// Gets all live items ordered by price, then name.
    pub async fn get_all(&self) -> Result<Vec<Item>, DbErr> {
        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::Deleted.eq(false))
            .order_by_asc(entity::item::Column::Price)
            .order_by_asc(entity::item::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: UpdateItemParam) -> Result<Item, DbErr> {
        let item = entity::prelude::Item::find_by_id(id)
            .filter(entity::item::Column::Deleted.eq(false))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Item with id {} not found",
                id
            )))?;

        let mut active_model: entity::item::ActiveModel = item.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.description = ActiveValue::Set(param.description);
        active_model.price = ActiveValue::Set(param.price);
        active_model.category = ActiveValue::Set(param.category);

        let entity = active_model.update(self.db).await?;

        Ok(Item::from_entity(entity))
    }

    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Item::update_many()
            .filter(entity::item::Column::Id.eq(id))
            .col_expr(
                entity::item::Column::Deleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
