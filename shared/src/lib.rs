//! Ferro Shared - 零售后台共享数据模型
//!
//! 服务端与客户端共用的数据结构：
//!
//! - **models**: 持久化文档和 API 传输的 serde 模型
//! - **util**: 时间戳和 Snowflake ID 生成

pub mod models;
pub mod util;

pub use util::{now_millis, snowflake_id};
