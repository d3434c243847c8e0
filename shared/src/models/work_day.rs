//! WorkDay Model (营业日)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sale::Sale;

/// Work day status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayStatus {
    Open,
    Closed,
}

impl Default for DayStatus {
    fn default() -> Self {
        Self::Open
    }
}

/// Work day entity (营业日)
///
/// 同一时刻最多只有一个 Open 状态的营业日。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDay {
    pub id: i64,

    /// 开始营业的本地日期
    pub date: NaiveDate,

    /// 开始时间 (Unix timestamp millis)
    pub opened_at: i64,

    /// 结束时间 (Unix timestamp millis)
    pub closed_at: Option<i64>,

    /// 营业日状态
    #[serde(default)]
    pub status: DayStatus,

    /// 当日销售记录 ID 列表 (只存 ID，销售记录在全局账本)
    #[serde(default)]
    pub sale_ids: Vec<i64>,

    /// 当日累计金额 — 展示用缓存，收市时以账本重算为准
    #[serde(default)]
    pub total: f64,
}

impl WorkDay {
    pub fn is_open(&self) -> bool {
        self.status == DayStatus::Open
    }
}

/// Day status report for the point of sale (营业状态)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatusReport {
    pub day_open: bool,
    pub day: Option<WorkDay>,
}

/// Work day with its sales resolved from the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDayDetail {
    #[serde(flatten)]
    pub day: WorkDay,
    pub sales: Vec<Sale>,
}
