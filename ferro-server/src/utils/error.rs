//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`ApiResponse`] - API 错误响应结构
//!
//! # 错误码规范
//!
//! 错误码为稳定的大写蛇形字符串，前端据此分支：
//!
//! | 错误码 | 场景 |
//! |--------|------|
//! | `DAY_ALREADY_OPEN` / `NO_OPEN_DAY` | 营业日状态机前置条件 |
//! | `OPEN_TOO_EARLY` / `OPEN_TOO_LATE` / `CLOSE_TOO_EARLY` | 营业时段校验 |
//! | `DAY_NOT_OPEN` / `INVALID_ITEMS` / `INSUFFICIENT_STOCK` | 收银台提交 |
//! | `PERSISTENCE` | 快照落盘失败 (请求视为未提交) |
//! | `VALIDATION` / `NOT_FOUND` / `CONFLICT` / ... | 通用 CRUD 错误 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::StoreError;
use crate::ledger::{DayError, SaleError};

/// API 统一错误响应结构
///
/// ```json
/// {
///   "code": "DAY_ALREADY_OPEN",
///   "message": "A work day is already open..."
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiResponse<()> {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 (401) ==========
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid or expired token")]
    InvalidToken,

    // ========== 业务逻辑错误 (4xx) ==========
    #[error("{message}")]
    NotFound { code: &'static str, message: String },

    #[error("Resource already exists: {0}")]
    Conflict(String),

    #[error("{message}")]
    Validation { code: &'static str, message: String },

    #[error("{message}")]
    BusinessRule { code: &'static str, message: String },

    // ========== 系统错误 (5xx) ==========
    #[error("Persistence failure: {0}")]
    Persistence(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Not authenticated. Please log in".to_string(),
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Invalid or expired token".to_string(),
            ),

            AppError::NotFound { code, message } => {
                (StatusCode::NOT_FOUND, *code, message.clone())
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Validation { code, message } => {
                (StatusCode::BAD_REQUEST, *code, message.clone())
            }
            AppError::BusinessRule { code, message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, *code, message.clone())
            }

            AppError::Persistence(msg) => {
                error!(target: "store", error = %msg, "Snapshot persistence failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PERSISTENCE",
                    "Failed to persist changes, the operation was not committed".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ApiResponse::error(code, message));
        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            code: "NOT_FOUND",
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            code: "VALIDATION",
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create an invalid credentials error with unified message
    /// Used to prevent username enumeration during login
    pub fn invalid_credentials() -> Self {
        Self::Validation {
            code: "INVALID_CREDENTIALS",
            message: "Invalid username or password".to_string(),
        }
    }
}

// ========== Domain Error Conversions ==========

impl From<DayError> for AppError {
    fn from(e: DayError) -> Self {
        AppError::BusinessRule {
            code: e.code(),
            message: e.to_string(),
        }
    }
}

impl From<SaleError> for AppError {
    fn from(e: SaleError) -> Self {
        match &e {
            SaleError::ProductNotFound(_) => AppError::NotFound {
                code: e.code(),
                message: e.to_string(),
            },
            SaleError::EmptyItems | SaleError::InvalidQuantity { .. } => AppError::Validation {
                code: e.code(),
                message: e.to_string(),
            },
            SaleError::DayNotOpen | SaleError::InsufficientStock { .. } => AppError::BusinessRule {
                code: e.code(),
                message: e.to_string(),
            },
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Persistence(e.to_string())
    }
}
