//! Refund Model

use serde::{Deserialize, Serialize};

use super::sale::Customer;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for RefundStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Refund request against a past sale
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub id: i64,
    /// 关联的销售记录，柜台手工退款时可为空
    pub sale_id: Option<i64>,
    pub customer: Customer,
    pub reason: String,
    pub amount: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: RefundStatus,
    pub created_at: i64,
    pub approved_at: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundCreate {
    pub sale_id: Option<i64>,
    pub customer: Customer,
    pub reason: String,
    pub amount: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundStatusUpdate {
    pub status: RefundStatus,
}
