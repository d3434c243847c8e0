//! Category API Handlers
//!
//! 分类在文档中就是一个名称列表；改名/删除时同步改写引用它的商品。

use axum::{
    Json,
    extract::{Extension, Path, State},
};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRename {
    #[serde(rename = "new")]
    pub new_name: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryRenamed {
    pub old: String,
    pub new: String,
}

/// GET /api/categories - 获取所有分类 (公开)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<String>>> {
    let snapshot = state.store.load()?;
    Ok(Json(snapshot.categories))
}

/// POST /api/categories - 新建分类 (大小写不敏感查重)
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<String>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    let name = payload.name.trim().to_string();

    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    if snapshot
        .categories
        .iter()
        .any(|c| c.eq_ignore_ascii_case(&name))
    {
        return Err(AppError::conflict(format!(
            "Category '{}' already exists",
            name
        )));
    }
    snapshot.categories.push(name.clone());
    state.store.save(&snapshot)?;

    tracing::info!(operator = %current_user.username, category = %name, "Category created");
    Ok(Json(name))
}

/// PUT /api/categories/{name} - 分类改名，并改写引用它的商品
pub async fn rename(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(name): Path<String>,
    Json(payload): Json<CategoryRename>,
) -> AppResult<Json<CategoryRenamed>> {
    validate_required_text(&payload.new_name, "new", MAX_NAME_LEN)?;
    let new_name = payload.new_name.trim().to_string();

    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let idx = snapshot
        .categories
        .iter()
        .position(|c| c.eq_ignore_ascii_case(&name))
        .ok_or_else(|| AppError::not_found(format!("Category '{}' not found", name)))?;

    if snapshot
        .categories
        .iter()
        .enumerate()
        .any(|(i, c)| i != idx && c.eq_ignore_ascii_case(&new_name))
    {
        return Err(AppError::conflict(format!(
            "Category '{}' already exists",
            new_name
        )));
    }

    let old = std::mem::replace(&mut snapshot.categories[idx], new_name.clone());
    for product in snapshot.products.iter_mut() {
        if product.category == old {
            product.category = new_name.clone();
        }
    }
    state.store.save(&snapshot)?;

    tracing::info!(operator = %current_user.username, old = %old, new = %new_name, "Category renamed");
    Ok(Json(CategoryRenamed {
        old,
        new: new_name,
    }))
}

/// DELETE /api/categories/{name} - 删除分类 (商品保留，分类字段清空)
pub async fn remove(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(name): Path<String>,
) -> AppResult<Json<String>> {
    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let idx = snapshot
        .categories
        .iter()
        .position(|c| c.eq_ignore_ascii_case(&name))
        .ok_or_else(|| AppError::not_found(format!("Category '{}' not found", name)))?;

    let removed = snapshot.categories.remove(idx);
    for product in snapshot.products.iter_mut() {
        if product.category == removed {
            product.category.clear();
        }
    }
    state.store.save(&snapshot)?;

    tracing::info!(operator = %current_user.username, category = %removed, "Category deleted");
    Ok(Json(removed))
}
