//! ScheduleConfig Model (营业时段配置)

use serde::{Deserialize, Serialize};

/// Allowed time-of-day windows for opening and closing a work day.
///
/// 所有时间均为固定宽度、零填充的 24 小时制 "HH:MM" 本地时间。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    /// 是否启用时段校验；关闭时开市/收市不做任何时间检查
    #[serde(default)]
    pub control_enabled: bool,
    pub earliest_open: String,
    pub latest_open: String,
    pub earliest_close: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            control_enabled: false,
            earliest_open: "08:00".to_string(),
            latest_open: "08:30".to_string(),
            earliest_close: "17:00".to_string(),
        }
    }
}

/// Partial schedule update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdate {
    pub control_enabled: Option<bool>,
    pub earliest_open: Option<String>,
    pub latest_open: Option<String>,
    pub earliest_close: Option<String>,
}
