//! Product API Handlers

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::ledger::inventory;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_money, validate_optional_text,
    validate_quantity, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{LowStockReport, Product, ProductCreate, ProductUpdate, RestockRequest};

/// Query params for the low-stock report
#[derive(Debug, Deserialize)]
pub struct LowStockQuery {
    #[serde(default = "default_threshold")]
    pub threshold: i64,
}

fn default_threshold() -> i64 {
    5
}

/// GET /api/products - 获取所有商品 (公开)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let snapshot = state.store.load()?;
    Ok(Json(snapshot.products))
}

/// GET /api/products/{id} - 获取单个商品 (公开)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let snapshot = state.store.load()?;
    let product = snapshot
        .products
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;
    Ok(Json(product))
}

/// GET /api/products/low-stock?threshold=N - 低库存报表 (公开)
pub async fn low_stock(
    State(state): State<ServerState>,
    Query(query): Query<LowStockQuery>,
) -> AppResult<Json<LowStockReport>> {
    let snapshot = state.store.load()?;
    Ok(Json(inventory::low_stock(&snapshot, query.threshold)))
}

/// POST /api/products - 新建商品
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.category, "category", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    validate_money(payload.price, "price")?;
    validate_quantity(payload.stock, "stock")?;

    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let product = Product {
        id: shared::snowflake_id(),
        name: payload.name,
        description: payload.description.unwrap_or_default(),
        category: payload.category,
        stock: payload.stock,
        price: payload.price,
        image: payload.image.unwrap_or_default(),
        created_at: shared::now_millis(),
    };
    snapshot.products.push(product.clone());
    state.store.save(&snapshot)?;

    tracing::info!(
        operator = %current_user.username,
        product_id = product.id,
        name = %product.name,
        "Product created"
    );
    Ok(Json(product))
}

/// PUT /api/products/{id} - 更新商品 (只更新提交的字段)
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    if let Some(price) = payload.price {
        validate_money(price, "price")?;
    }
    if let Some(stock) = payload.stock {
        validate_quantity(stock, "stock")?;
    }

    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let product = snapshot
        .products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;

    if let Some(name) = payload.name {
        product.name = name;
    }
    if let Some(description) = payload.description {
        product.description = description;
    }
    if let Some(category) = payload.category {
        product.category = category;
    }
    if let Some(stock) = payload.stock {
        product.stock = stock;
    }
    if let Some(price) = payload.price {
        product.price = price;
    }
    if let Some(image) = payload.image {
        product.image = image;
    }
    let updated = product.clone();
    state.store.save(&snapshot)?;

    tracing::info!(operator = %current_user.username, product_id = id, "Product updated");
    Ok(Json(updated))
}

/// DELETE /api/products/{id} - 删除商品
pub async fn remove(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let idx = snapshot
        .products
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;
    let removed = snapshot.products.remove(idx);
    state.store.save(&snapshot)?;

    tracing::info!(
        operator = %current_user.username,
        product_id = id,
        name = %removed.name,
        "Product deleted"
    );
    Ok(Json(removed))
}

/// POST /api/products/{id}/restock - 手工补货
pub async fn restock(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<RestockRequest>,
) -> AppResult<Json<Product>> {
    if payload.quantity <= 0 {
        return Err(AppError::validation(format!(
            "quantity must be positive, got {}",
            payload.quantity
        )));
    }

    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let product = inventory::restock(&mut snapshot, id, payload.quantity)
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;
    state.store.save(&snapshot)?;

    tracing::info!(
        operator = %current_user.username,
        product_id = id,
        quantity = payload.quantity,
        stock = product.stock,
        "Product restocked"
    );
    Ok(Json(product))
}
