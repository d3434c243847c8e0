use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::auth::SessionService;
use crate::core::Config;
use crate::db::SnapshotStore;
use crate::utils::{AppError, AppResult};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 的成本极低。
/// 注意：这里**不缓存**任何业务数据 (营业日、配置等)——
/// 每个请求都从 [`SnapshotStore`] 重新加载，避免与落盘文档分叉。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | store | 快照存储 (全局写锁在它上面) |
/// | sessions | 会话门卫 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<SnapshotStore>,
    pub sessions: Arc<SessionService>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 确保工作目录存在，并加载一次快照 — 文件缺失或不可读时
    /// 会在此时创建默认空文档。
    pub fn initialize(config: &Config) -> AppResult<Self> {
        std::fs::create_dir_all(&config.work_dir).map_err(|e| {
            AppError::internal(format!(
                "Failed to create work dir {}: {e}",
                config.work_dir
            ))
        })?;

        let store = SnapshotStore::open(config.db_path());
        let snapshot = store.load()?;
        tracing::info!(
            "Snapshot loaded from {}: {} products, {} sales, {} work days",
            store.path().display(),
            snapshot.products.len(),
            snapshot.sales.len(),
            snapshot.days.len()
        );

        Ok(Self {
            config: config.clone(),
            store: Arc::new(store),
            sessions: Arc::new(SessionService::new(config.session_ttl_ms)),
        })
    }

    /// 当前时间 (营业时区) — 所有时段校验统一从这里取墙钟
    pub fn now(&self) -> DateTime<Tz> {
        crate::utils::time::now_in(self.config.timezone)
    }
}
