//! 认证门卫模块
//!
//! 认证机制本身在本系统范围之外，这里只提供一个不透明的门卫：
//! 请求要么已认证 (带有效会话令牌)，要么未认证，外加一个用于
//! 日志的操作者身份 [`CurrentUser`]。
//!
//! 令牌为随机十六进制字符串，带 TTL，保存在进程内的会话表中。

mod middleware;
mod service;

pub use middleware::{extract_bearer, require_auth};
pub use service::{CurrentUser, SessionService};
