//! Schedule API Handlers

use axum::{
    Json,
    extract::{Extension, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::time::parse_hhmm;
use shared::models::{ScheduleConfig, ScheduleUpdate};

/// GET /api/schedule - 营业时段配置 (收银台展示用，公开)
pub async fn get_schedule(State(state): State<ServerState>) -> AppResult<Json<ScheduleConfig>> {
    let snapshot = state.store.load()?;
    Ok(Json(snapshot.schedule))
}

/// PUT /api/schedule - 更新时段配置 (只更新提交的字段)
///
/// 所有时间字段必须是零填充 24 小时制 "HH:MM"，入口即校验，
/// 保证文档里的时段始终可解析。
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<ScheduleUpdate>,
) -> AppResult<Json<ScheduleConfig>> {
    for value in [
        &payload.earliest_open,
        &payload.latest_open,
        &payload.earliest_close,
    ]
    .into_iter()
    .flatten()
    {
        parse_hhmm(value)?;
    }

    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let schedule = &mut snapshot.schedule;
    if let Some(enabled) = payload.control_enabled {
        schedule.control_enabled = enabled;
    }
    if let Some(earliest_open) = payload.earliest_open {
        schedule.earliest_open = earliest_open;
    }
    if let Some(latest_open) = payload.latest_open {
        schedule.latest_open = latest_open;
    }
    if let Some(earliest_close) = payload.earliest_close {
        schedule.earliest_close = earliest_close;
    }
    let updated = schedule.clone();
    state.store.save(&snapshot)?;

    tracing::info!(
        operator = %current_user.username,
        control_enabled = updated.control_enabled,
        "Schedule updated"
    );
    Ok(Json(updated))
}
