//! Store Info API Handlers

use axum::{
    Json,
    extract::{Extension, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use shared::models::{StoreInfo, StoreInfoUpdate};

/// GET /api/store-info - 店铺信息
pub async fn get_info(State(state): State<ServerState>) -> AppResult<Json<StoreInfo>> {
    let snapshot = state.store.load()?;
    Ok(Json(snapshot.store_info))
}

/// PUT /api/store-info - 更新店铺信息 (只更新提交的字段)
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<StoreInfoUpdate>,
) -> AppResult<Json<StoreInfo>> {
    if let Some(site_name) = &payload.site_name {
        validate_required_text(site_name, "siteName", MAX_NAME_LEN)?;
    }
    if let Some(currency) = &payload.currency {
        validate_required_text(currency, "currency", MAX_SHORT_TEXT_LEN)?;
    }

    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let info = &mut snapshot.store_info;
    if let Some(site_name) = payload.site_name {
        info.site_name = site_name;
    }
    if let Some(version) = payload.version {
        info.version = version;
    }
    if let Some(currency) = payload.currency {
        info.currency = currency;
    }
    let updated = info.clone();
    state.store.save(&snapshot)?;

    tracing::info!(operator = %current_user.username, "Store info updated");
    Ok(Json(updated))
}
