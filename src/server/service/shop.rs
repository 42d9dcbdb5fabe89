//! Shop service: the item catalogue, purchases, and student inventories.
//!
//! A purchase is one transaction: the student's gold is re-read inside it, the
//! price check runs against that fresh value, and the debit and inventory
//! upsert commit together. Two rapid purchases can therefore never spend the
//! same gold twice.

use entity::item::ItemCategory;
use sea_orm::{ActiveEnum, DatabaseConnection, TransactionTrait};

use crate::{
    model::shop::{
        CreateItemDto, InventoryEntryDto, ItemDto, PurchaseResultDto, UpdateItemDto,
    },
    server::{
        data::{item::ItemRepository, player_item::PlayerItemRepository, user::UserRepository},
        error::AppError,
        model::{
            shop::{CreateItemParam, PurchaseResult, UpdateItemParam},
            user::User,
        },
        service::daily_task::flatten_transaction_error,
    },
};

pub struct ShopService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_item(&self, dto: CreateItemDto) -> Result<ItemDto, AppError> {
        let repo = ItemRepository::new(self.db);

        let category = parse_category(&dto.category)?;
        validate_item(&dto.name, dto.price)?;

        let item = repo
            .create(CreateItemParam {
                name: dto.name.trim().to_string(),
                description: dto.description,
                price: dto.price,
                category,
            })
            .await?;

        Ok(item.into_dto())
    }

    /// The catalogue as students see it; soft-deleted items are gone.
    pub async fn get_catalogue(&self) -> Result<Vec<ItemDto>, AppError> {
        let repo = ItemRepository::new(self.db);

        let items = repo.get_all().await?;

        Ok(items.into_iter().map(|item| item.into_dto()).collect())
    }

    pub async fn update_item(&self, id: i32, dto: UpdateItemDto) -> Result<ItemDto, AppError> {
        let repo = ItemRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Item not found".to_string()));
        }

        let category = parse_category(&dto.category)?;
        validate_item(&dto.name, dto.price)?;

        let item = repo
            .update(
                id,
                UpdateItemParam {
                    name: dto.name.trim().to_string(),
                    description: dto.description,
                    price: dto.price,
                    category,
                },
            )
            .await?;

        Ok(item.into_dto())
    }

    pub async fn delete_item(&self, id: i32) -> Result<(), AppError> {
        let repo = ItemRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Item not found".to_string()));
        }

        repo.soft_delete(id).await?;

        Ok(())
    }

    /// Buys one copy of an item for the calling student.
    ///
    /// # Returns
    /// - `Ok(PurchaseResultDto)` - Quantity now owned and gold left
    /// - `Err(AppError::BadRequest(_))` - Insufficient gold
    /// - `Err(AppError::NotFound(_))` - Unknown or deleted item
    pub async fn buy(&self, student: &User, item_id: i32) -> Result<PurchaseResultDto, AppError> {
        let student_id = student.id;

        let result = self
            .db
            .transaction::<_, PurchaseResult, AppError>(move |txn| {
                Box::pin(async move {
                    let item_repo = ItemRepository::new(txn);
                    let user_repo = UserRepository::new(txn);
                    let owned_repo = PlayerItemRepository::new(txn);

                    let Some(item) = item_repo.get_by_id(item_id).await? else {
                        return Err(AppError::NotFound("Item not found".to_string()));
                    };

                    // Fresh balance; the session user may be stale.
                    let Some(buyer) = user_repo.find_by_id(student_id).await? else {
                        return Err(AppError::NotFound("Student not found".to_string()));
                    };

                    if buyer.gold < item.price {
                        return Err(AppError::BadRequest("Insufficient gold".to_string()));
                    }

                    user_repo.set_gold(student_id, buyer.gold - item.price).await?;
                    let quantity = owned_repo.add_item(student_id, item_id).await?;

                    Ok(PurchaseResult {
                        item_id,
                        quantity,
                        gold_remaining: buyer.gold - item.price,
                    })
                })
            })
            .await
            .map_err(flatten_transaction_error)?;

        Ok(result.into_dto())
    }

    pub async fn get_inventory(&self, student: &User) -> Result<Vec<InventoryEntryDto>, AppError> {
        let repo = PlayerItemRepository::new(self.db);

        let inventory = repo.get_inventory(student.id).await?;

        Ok(inventory.into_iter().map(|entry| entry.into_dto()).collect())
    }
}

fn parse_category(category: &str) -> Result<ItemCategory, AppError> {
    ItemCategory::try_from_value(&category.to_string())
        .map_err(|_| AppError::BadRequest("Unknown item category".to_string()))
}

fn validate_item(name: &str, price: i32) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Item name is required".to_string()));
    }

    if price < 0 {
        return Err(AppError::BadRequest(
            "Item price must not be negative".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[test]
    fn parses_known_categories() {
        assert_eq!(parse_category("consumable").unwrap(), ItemCategory::Consumable);
        assert_eq!(parse_category("cosmetic").unwrap(), ItemCategory::Cosmetic);
        assert!(parse_category("legendary").is_err());
    }

    #[test]
    fn rejects_invalid_items() {
        assert!(validate_item("", 10).is_err());
        assert!(validate_item("Potion", -5).is_err());
        assert!(validate_item("Potion", 0).is_ok());
    }

    /// Tests buying the same item twice.
    ///
    /// Expected: gold debited per purchase and the inventory row stacking
    /// to quantity 2
    #[tokio::test]
    async fn purchase_debits_gold_and_stacks_quantity() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let student_model = factory::user::UserFactory::new(db).gold(50).build().await?;
        let item = factory::item::ItemFactory::new(db).price(20).build().await?;

        let student = User::from_entity(student_model);
        let service = ShopService::new(db);

        let first = service.buy(&student, item.id).await?;
        assert_eq!(first.item_id, item.id);
        assert_eq!(first.quantity, 1);
        assert_eq!(first.gold_remaining, 30);

        let second = service.buy(&student, item.id).await?;
        assert_eq!(second.quantity, 2);
        assert_eq!(second.gold_remaining, 10);

        let refreshed = UserRepository::new(db)
            .find_by_id(student.id)
            .await?
            .unwrap();
        assert_eq!(refreshed.gold, 10);

        Ok(())
    }

    /// Tests buying an item the student cannot afford.
    ///
    /// Expected: Err(BadRequest) with gold and inventory untouched
    #[tokio::test]
    async fn insufficient_gold_rejects_purchase() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let student_model = factory::user::UserFactory::new(db).gold(10).build().await?;
        let item = factory::item::ItemFactory::new(db).price(20).build().await?;

        let student = User::from_entity(student_model);
        let result = ShopService::new(db).buy(&student, item.id).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let refreshed = UserRepository::new(db)
            .find_by_id(student.id)
            .await?
            .unwrap();
        assert_eq!(refreshed.gold, 10);

        let inventory = ShopService::new(db).get_inventory(&student).await?;
        assert!(inventory.is_empty());

        Ok(())
    }

    /// Tests buying a soft-deleted item.
    ///
    /// Expected: Err(NotFound), same as an item that never existed
    #[tokio::test]
    async fn deleted_item_is_not_for_sale() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let student_model = factory::user::UserFactory::new(db).gold(50).build().await?;
        let item = factory::item::ItemFactory::new(db)
            .price(20)
            .deleted(true)
            .build()
            .await?;

        let student = User::from_entity(student_model);
        let result = ShopService::new(db).buy(&student, item.id).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        let refreshed = UserRepository::new(db)
            .find_by_id(student.id)
            .await?
            .unwrap();
        assert_eq!(refreshed.gold, 50);

        Ok(())
    }
}
