//! Refund API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_money, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Refund, RefundCreate, RefundStatus, RefundStatusUpdate};

/// GET /api/refunds - 全部退款
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Refund>>> {
    let snapshot = state.store.load()?;
    Ok(Json(snapshot.refunds))
}

/// POST /api/refunds - 登记退款 (初始状态 Pending)
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<RefundCreate>,
) -> AppResult<Json<Refund>> {
    validate_required_text(&payload.customer.name, "customer.name", MAX_NAME_LEN)?;
    validate_required_text(&payload.reason, "reason", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    validate_money(payload.amount, "amount")?;

    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    // 关联销售可选，但给了就必须真的在账本里
    if let Some(sale_id) = payload.sale_id
        && !snapshot.sales.iter().any(|s| s.id == sale_id)
    {
        return Err(AppError::not_found(format!("Sale {} not found", sale_id)));
    }

    let refund = Refund {
        id: shared::snowflake_id(),
        sale_id: payload.sale_id,
        customer: payload.customer,
        reason: payload.reason,
        amount: payload.amount,
        notes: payload.notes.unwrap_or_default(),
        status: RefundStatus::Pending,
        created_at: shared::now_millis(),
        approved_at: None,
    };
    snapshot.refunds.push(refund.clone());
    state.store.save(&snapshot)?;

    tracing::info!(
        operator = %current_user.username,
        refund_id = refund.id,
        amount = refund.amount,
        "Refund created"
    );
    Ok(Json(refund))
}

/// PUT /api/refunds/{id}/status - 更新退款状态
///
/// 转入 Approved 时盖上批准时间戳。
pub async fn set_status(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<RefundStatusUpdate>,
) -> AppResult<Json<Refund>> {
    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let refund = snapshot
        .refunds
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::not_found(format!("Refund {} not found", id)))?;

    refund.status = payload.status;
    if payload.status == RefundStatus::Approved {
        refund.approved_at = Some(shared::now_millis());
    }
    let updated = refund.clone();
    state.store.save(&snapshot)?;

    tracing::info!(
        operator = %current_user.username,
        refund_id = id,
        status = ?updated.status,
        "Refund status updated"
    );
    Ok(Json(updated))
}

/// DELETE /api/refunds/{id} - 删除退款
pub async fn remove(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Refund>> {
    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let idx = snapshot
        .refunds
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| AppError::not_found(format!("Refund {} not found", id)))?;
    let removed = snapshot.refunds.remove(idx);
    state.store.save(&snapshot)?;

    tracing::info!(operator = %current_user.username, refund_id = id, "Refund deleted");
    Ok(Json(removed))
}
