//! 营业日状态机 (开市 / 收市)
//!
//! 不变量：任意时刻最多一个 `Open` 状态的营业日。
//! 开市前先查重复，再做时段校验；收市总额从全局销售账本重算，
//! 日内累计值只是展示缓存。

use chrono::DateTime;
use chrono_tz::Tz;

use shared::models::{DayStatus, ScheduleConfig, WorkDay};

use super::money;
use crate::db::Snapshot;
use crate::utils::time::{fmt_hhmm, minute_of, parse_window_time};

/// Day state machine errors — every variant carries the violated bound
#[derive(Debug, thiserror::Error)]
pub enum DayError {
    #[error("A work day is already open. Close it before opening a new one")]
    AlreadyOpen,

    #[error("No open work day to close")]
    NoOpenDay,

    #[error("The day cannot be opened before {min}, current time is {now}")]
    OpenTooEarly { min: String, now: String },

    #[error("The latest time to open the day is {max}, current time is {now}")]
    OpenTooLate { max: String, now: String },

    #[error("The day cannot be closed before {min}, current time is {now}")]
    CloseTooEarly { min: String, now: String },
}

impl DayError {
    /// Stable error code for the API envelope
    pub fn code(&self) -> &'static str {
        match self {
            DayError::AlreadyOpen => "DAY_ALREADY_OPEN",
            DayError::NoOpenDay => "NO_OPEN_DAY",
            DayError::OpenTooEarly { .. } => "OPEN_TOO_EARLY",
            DayError::OpenTooLate { .. } => "OPEN_TOO_LATE",
            DayError::CloseTooEarly { .. } => "CLOSE_TOO_EARLY",
        }
    }
}

/// 查询当前营业日 — 无副作用
pub fn find_open_day(snapshot: &Snapshot) -> Option<&WorkDay> {
    snapshot.days.iter().find(|d| d.is_open())
}

fn check_open_window(schedule: &ScheduleConfig, now: &DateTime<Tz>) -> Result<(), DayError> {
    if !schedule.control_enabled {
        return Ok(());
    }
    // 分钟粒度、两端闭区间
    let current = minute_of(now);
    if current < parse_window_time(&schedule.earliest_open) {
        return Err(DayError::OpenTooEarly {
            min: schedule.earliest_open.clone(),
            now: fmt_hhmm(current),
        });
    }
    if current > parse_window_time(&schedule.latest_open) {
        return Err(DayError::OpenTooLate {
            max: schedule.latest_open.clone(),
            now: fmt_hhmm(current),
        });
    }
    Ok(())
}

fn check_close_window(schedule: &ScheduleConfig, now: &DateTime<Tz>) -> Result<(), DayError> {
    if !schedule.control_enabled {
        return Ok(());
    }
    let current = minute_of(now);
    if current < parse_window_time(&schedule.earliest_close) {
        return Err(DayError::CloseTooEarly {
            min: schedule.earliest_close.clone(),
            now: fmt_hhmm(current),
        });
    }
    Ok(())
}

/// 开市
///
/// 前置条件：
/// 1. 没有处于 Open 状态的营业日 (先于时段校验检查)
/// 2. 启用时段控制时，当前时刻在 `[earliest_open, latest_open]` 内
pub fn open_day(snapshot: &mut Snapshot, now: DateTime<Tz>) -> Result<WorkDay, DayError> {
    if find_open_day(snapshot).is_some() {
        return Err(DayError::AlreadyOpen);
    }
    check_open_window(&snapshot.schedule, &now)?;

    let day = WorkDay {
        id: shared::snowflake_id(),
        date: now.date_naive(),
        opened_at: now.timestamp_millis(),
        closed_at: None,
        status: DayStatus::Open,
        sale_ids: Vec::new(),
        total: 0.0,
    };
    snapshot.days.push(day.clone());
    Ok(day)
}

/// 收市
///
/// 总额以账本为准：对 `sale_ids` 引用的每笔销售求和后覆盖缓存值。
pub fn close_day(snapshot: &mut Snapshot, now: DateTime<Tz>) -> Result<WorkDay, DayError> {
    let Some(idx) = snapshot.days.iter().position(|d| d.is_open()) else {
        return Err(DayError::NoOpenDay);
    };
    check_close_window(&snapshot.schedule, &now)?;

    let total = {
        let day = &snapshot.days[idx];
        money::sum_money(
            snapshot
                .sales
                .iter()
                .filter(|s| day.sale_ids.contains(&s.id))
                .map(|s| s.total),
        )
    };

    let day = &mut snapshot.days[idx];
    day.total = total;
    day.closed_at = Some(now.timestamp_millis());
    day.status = DayStatus::Closed;
    Ok(day.clone())
}
