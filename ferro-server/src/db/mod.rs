//! 快照存储 — 单一扁平 JSON 文档
//!
//! 全部业务数据保存在工作目录下的一个 `db.json` 文档中，没有局部更新：
//! 每个变更操作都是 **整体加载 → 内存修改 → 整体落盘**。
//!
//! - 写操作通过 store 持有的全局互斥锁串行化 ([`SnapshotStore::lock_for_write`])，
//!   任意时刻最多一个逻辑写者，读操作不加锁。
//! - 落盘采用同目录临时文件 + rename，对调用方呈现原子替换语义。
//! - 落盘失败必须向调用方返回错误，绝不吞掉。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, MutexGuard};

use shared::models::{
    AdminAccount, Product, PurchaseOrder, Refund, Sale, ScheduleConfig, StoreInfo, Supplier,
    WorkDay,
};

/// Store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write snapshot to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// 持久化文档 — Store 整体加载/保存的单位
///
/// 缺失字段反序列化为默认值，便于文档结构向前演进。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub admin: AdminAccount,
    pub store_info: StoreInfo,
    pub schedule: ScheduleConfig,
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    /// 全局销售账本 — 营业日只引用这里的 id
    pub sales: Vec<Sale>,
    pub days: Vec<WorkDay>,
    pub refunds: Vec<Refund>,
    pub suppliers: Vec<Supplier>,
    pub purchase_orders: Vec<PurchaseOrder>,
}

/// Snapshot store — owns the persisted flat JSON document
pub struct SnapshotStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SnapshotStore {
    /// Create a store over the given document path. The file itself is
    /// created lazily on first [`load`](Self::load).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 获取全局写锁 — 每个变更操作在整个 加载→修改→落盘 周期内持有
    pub async fn lock_for_write(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Load the full document.
    ///
    /// 文件不存在或不可读时创建默认空文档并立即落盘。
    /// 不可读的旧文件先改名为 `<path>.corrupt` 保留现场。
    pub fn load(&self) -> StoreResult<Snapshot> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<Snapshot>(&raw) {
                Ok(snapshot) => Ok(snapshot),
                Err(e) => {
                    tracing::warn!(
                        "Snapshot at {} is unreadable ({}), starting from an empty document",
                        self.path.display(),
                        e
                    );
                    let corrupt = self.path.with_extension("json.corrupt");
                    if let Err(e) = fs::rename(&self.path, &corrupt) {
                        tracing::warn!("Could not preserve corrupt snapshot: {}", e);
                    }
                    self.create_default()
                }
            },
            Err(_) => self.create_default(),
        }
    }

    /// Persist the whole document: serialize to a sibling temp file, then
    /// rename over the target, so the on-disk file is either the old or the
    /// new version, never a half-write.
    pub fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(snapshot)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw.as_bytes()).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }

    fn create_default(&self) -> StoreResult<Snapshot> {
        let snapshot = Snapshot::default();
        self.save(&snapshot)?;
        tracing::info!("Created empty snapshot at {}", self.path.display());
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DayStatus;

    fn temp_store() -> (tempfile::TempDir, SnapshotStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::open(dir.path().join("db.json"));
        (dir, store)
    }

    #[test]
    fn test_load_creates_and_persists_default_document() {
        let (_dir, store) = temp_store();

        let snapshot = store.load().unwrap();
        assert!(snapshot.products.is_empty());
        assert!(snapshot.days.is_empty());
        assert!(!snapshot.schedule.control_enabled);
        assert_eq!(snapshot.admin.username, "admin");

        // The default document must exist on disk after the first load
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, store) = temp_store();

        let mut snapshot = store.load().unwrap();
        snapshot.categories.push("Tools".to_string());
        snapshot.days.push(WorkDay {
            id: 42,
            date: chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            opened_at: 1_700_000_000_000,
            closed_at: None,
            status: DayStatus::Open,
            sale_ids: vec![],
            total: 0.0,
        });
        store.save(&snapshot).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.categories, vec!["Tools".to_string()]);
        assert_eq!(reloaded.days.len(), 1);
        assert_eq!(reloaded.days[0].id, 42);
        assert_eq!(reloaded.days[0].status, DayStatus::Open);
    }

    #[test]
    fn test_unreadable_document_is_replaced_and_preserved() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), b"{ not json").unwrap();

        let snapshot = store.load().unwrap();
        assert!(snapshot.sales.is_empty());

        // Old contents kept next to the fresh document
        assert!(store.path().with_extension("json.corrupt").exists());
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_failure_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        // Target path is a directory: the rename must fail and be reported
        let store = SnapshotStore::open(dir.path());
        let err = store.save(&Snapshot::default());
        assert!(err.is_err());
    }
}
