//! Ferro Server - 五金零售后台
//!
//! # 架构概述
//!
//! 单进程 axum 服务，全部业务数据持久化为一个扁平 JSON 快照文档：
//!
//! - **快照存储** (`db`): 整体加载/整体落盘，原子替换，全局写锁
//! - **账本核心** (`ledger`): 营业日状态机、收银台两阶段提交、库存操作
//! - **认证门卫** (`auth`): 不透明会话令牌 + 操作者身份注入
//! - **HTTP API** (`api`): 按资源划分的 RESTful 路由
//!
//! # 模块结构
//!
//! ```text
//! ferro-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── db/            # 快照存储
//! ├── ledger/        # 营业日/销售/库存核心
//! ├── auth/          # 会话门卫与中间件
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志、时间、校验
//! ```
//!
//! # 一致性模型
//!
//! 每个变更操作在快照存储的全局写锁内完成 加载 → 修改 → 落盘，
//! 对其它操作表现为原子；查询不加锁，读到的永远是最近一次成功
//! 落盘的文档。进程内不缓存任何业务状态。

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod ledger;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, SessionService};
pub use core::{Config, Server, ServerState};
pub use db::{Snapshot, SnapshotStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ______
   / ____/__  ______________
  / /_  / _ \/ ___/ ___/ __ \
 / __/ /  __/ /  / /  / /_/ /
/_/    \___/_/  /_/   \____/
    "#
    );
}
