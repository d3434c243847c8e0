//! Sales API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::ledger;
use crate::utils::{AppError, AppResult};
use shared::models::{Sale, SaleCreate, SaleReceipt, SaleStats};

/// POST /api/sales - 收银台结账 (公开)
///
/// 两阶段提交见 [`ledger::commit_sale`]。落盘失败时整笔销售视为
/// 未提交 — 内存里的扣减随快照一起被丢弃，绝不报告部分成功。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SaleCreate>,
) -> AppResult<Json<SaleReceipt>> {
    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let sale = ledger::commit_sale(&mut snapshot, state.now(), payload)?;
    state.store.save(&snapshot)?;

    tracing::info!(
        sale_id = sale.id,
        total = sale.total,
        lines = sale.items.len(),
        "Sale committed"
    );
    Ok(Json(SaleReceipt { sale }))
}

/// GET /api/sales - 全部销售记录
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Sale>>> {
    let snapshot = state.store.load()?;
    Ok(Json(snapshot.sales))
}

/// GET /api/sales/{id} - 单笔销售详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Sale>> {
    let snapshot = state.store.load()?;
    let sale = snapshot
        .sales
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::not_found(format!("Sale {} not found", id)))?;
    Ok(Json(sale))
}

/// GET /api/sales/stats - 销售统计
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<SaleStats>> {
    let snapshot = state.store.load()?;
    Ok(Json(ledger::sales_stats(&snapshot.sales)))
}
