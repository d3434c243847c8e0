use std::path::PathBuf;

use chrono_tz::Tz;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (快照文档、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | TIMEZONE | America/Bogota | 营业时区 (时段校验用) |
/// | ENVIRONMENT | development | 运行环境 |
/// | SESSION_TTL_MS | 3600000 | 会话有效期 (毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/var/lib/ferro HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存放快照文档和日志
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 营业时区 — 开市/收市时段都按这个时区的墙钟比较
    pub timezone: Tz,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 会话有效期 (毫秒)
    pub session_ttl_ms: i64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::America::Bogota),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            session_ttl_ms: std::env::var("SESSION_TTL_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3_600_000),
        }
    }

    /// 快照文档路径
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("db.json")
    }
}
