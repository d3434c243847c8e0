//! Work Day API Handlers
//!
//! 开市/收市是变更操作，在 store 的全局写锁内走
//! 整体加载 → 状态机 → 整体落盘；查询不加锁。

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::ledger;
use crate::utils::{AppError, AppResult};
use shared::models::{DayStatusReport, WorkDay, WorkDayDetail};

/// GET /api/days - 营业日历史 (新的在前)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<WorkDay>>> {
    let snapshot = state.store.load()?;
    let mut days = snapshot.days;
    days.sort_by(|a, b| b.opened_at.cmp(&a.opened_at));
    Ok(Json(days))
}

/// GET /api/days/status - 当前营业状态 (收银台轮询，公开)
pub async fn status(State(state): State<ServerState>) -> AppResult<Json<DayStatusReport>> {
    let snapshot = state.store.load()?;
    let day = ledger::find_open_day(&snapshot).cloned();
    Ok(Json(DayStatusReport {
        day_open: day.is_some(),
        day,
    }))
}

/// GET /api/days/{id} - 营业日详情，带账本中解析出的完整销售记录
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<WorkDayDetail>> {
    let snapshot = state.store.load()?;
    let day = snapshot
        .days
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("Work day {} not found", id)))?;

    let sales = ledger::sales_for_day(&snapshot, &day);
    Ok(Json(WorkDayDetail { day, sales }))
}

/// POST /api/days/open - 开市
pub async fn open(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<WorkDay>> {
    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let day = ledger::open_day(&mut snapshot, state.now())?;
    state.store.save(&snapshot)?;

    tracing::info!(
        operator = %current_user.username,
        day_id = day.id,
        "Work day opened"
    );
    Ok(Json(day))
}

/// POST /api/days/close - 收市 (总额按账本重算)
pub async fn close(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<WorkDay>> {
    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let day = ledger::close_day(&mut snapshot, state.now())?;
    state.store.save(&snapshot)?;

    tracing::info!(
        operator = %current_user.username,
        day_id = day.id,
        total = day.total,
        sales = day.sale_ids.len(),
        "Work day closed"
    );
    Ok(Json(day))
}
