//! 时间工具函数 — 营业时区与时段解析
//!
//! 营业时段配置以固定宽度 "HH:MM" 字符串持久化，
//! 比较前解析为 [`NaiveTime`] 并截断到分钟精度。

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// 当前时间 (营业时区)
pub fn now_in(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

/// 严格解析 "HH:MM" (配置更新入口)
pub fn parse_hhmm(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
        AppError::validation(format!(
            "Invalid time of day '{value}', expected zero-padded 24h HH:MM"
        ))
    })
}

/// 宽松解析存量配置中的 "HH:MM"，失败回退 00:00
///
/// 配置更新入口已严格校验，这里只兜底手工编辑过的文档。
pub fn parse_window_time(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M").unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to parse schedule time '{}': {}, falling back to 00:00",
            value,
            e
        );
        NaiveTime::MIN
    })
}

/// 当前时刻截断到分钟 — 时段边界为分钟粒度，两端均为闭区间
pub fn minute_of(now: &DateTime<Tz>) -> NaiveTime {
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(NaiveTime::MIN)
}

/// 格式化为 "HH:MM" (错误消息展示)
pub fn fmt_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_hhmm_valid() {
        assert_eq!(
            parse_hhmm("08:30").unwrap(),
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
        assert_eq!(
            parse_hhmm("00:00").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_hhmm("23:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_hhmm_invalid() {
        assert!(parse_hhmm("24:00").is_err());
        assert!(parse_hhmm("8am").is_err());
        assert!(parse_hhmm("").is_err());
    }

    #[test]
    fn test_parse_window_time_falls_back_to_midnight() {
        assert_eq!(parse_window_time("nonsense"), NaiveTime::MIN);
    }

    #[test]
    fn test_minute_of_truncates_seconds() {
        let now = chrono_tz::UTC.with_ymd_and_hms(2025, 3, 10, 8, 30, 45).unwrap();
        assert_eq!(minute_of(&now), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    }
}
