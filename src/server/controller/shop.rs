use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        shop::{CreateItemDto, InventoryEntryDto, ItemDto, PurchaseResultDto, UpdateItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::shop::ShopService,
        state::AppState,
    },
};

/// Tag for grouping shop endpoints in OpenAPI documentation
pub static SHOP_TAG: &str = "shop";

/// Add an item to the shop catalogue.
///
/// # Access Control
/// - `Teacher` - Only teachers can manage the catalogue
#[utoipa::path(
    post,
    path = "/api/shop/items",
    tag = SHOP_TAG,
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Successfully created item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let item = ShopService::new(&state.db).create_item(payload).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Get the shop catalogue.
#[utoipa::path(
    get,
    path = "/api/shop/items",
    tag = SHOP_TAG,
    responses(
        (status = 200, description = "Catalogue items", body = Vec<ItemDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catalogue(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher, Permission::Student])
        .await?;

    let items = ShopService::new(&state.db).get_catalogue().await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Update a catalogue item.
#[utoipa::path(
    put,
    path = "/api/shop/items/{item_id}",
    tag = SHOP_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Successfully updated item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<i32>,
    Json(payload): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let item = ShopService::new(&state.db).update_item(item_id, payload).await?;

    Ok((StatusCode::OK, Json(item)))
}

/// Retire a catalogue item.
///
/// Soft delete; copies already in student inventories survive.
#[utoipa::path(
    delete,
    path = "/api/shop/items/{item_id}",
    tag = SHOP_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted item"),
        (status = 401, description = "User not authenticated or not a teacher", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    ShopService::new(&state.db).delete_item(item_id).await?;

    Ok(StatusCode::OK)
}

/// Buy one copy of an item.
///
/// The gold check and debit run in one transaction, so concurrent purchases
/// cannot overspend.
///
/// # Access Control
/// - `Student` - Only students hold gold
#[utoipa::path(
    post,
    path = "/api/shop/items/{item_id}/buy",
    tag = SHOP_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Purchase receipt", body = PurchaseResultDto),
        (status = 400, description = "Insufficient gold", body = ErrorDto),
        (status = 401, description = "User not authenticated or not a student", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn buy_item(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let receipt = ShopService::new(&state.db).buy(&student, item_id).await?;

    Ok((StatusCode::OK, Json(receipt)))
}

/// Get the calling student's inventory.
#[utoipa::path(
    get,
    path = "/api/shop/inventory",
    tag = SHOP_TAG,
    responses(
        (status = 200, description = "Owned items with quantities", body = Vec<InventoryEntryDto>),
        (status = 401, description = "User not authenticated or not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;

    let inventory = ShopService::new(&state.db).get_inventory(&student).await?;

    Ok((StatusCode::OK, Json(inventory)))
}
