//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型
//! - [`logger`] - 日志初始化
//! - [`time`] - 营业时区与 "HH:MM" 时段解析
//! - [`validation`] - 字段校验

pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{ApiResponse, AppError};
pub use result::AppResult;
