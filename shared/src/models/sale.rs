//! Sale Model (销售记录)

use serde::{Deserialize, Serialize};

/// Sale status — 当前范围内只有 Completed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatus {
    Completed,
}

impl Default for SaleStatus {
    fn default() -> Self {
        Self::Completed
    }
}

/// Customer snapshot captured on a sale or refund
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl Customer {
    /// 匿名顾客占位 (公开收银台不要求登记)
    pub fn anonymous() -> Self {
        Self {
            name: "Anonymous Customer".to_string(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

/// A sale line item — name and unit price are captured at commit time
/// and never recalculated when the catalog changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    pub product_id: i64,
    pub name: String,
    pub unit_price: f64,
    pub quantity: i64,
    pub subtotal: f64,
}

/// Sale entity (不可变账本条目)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: i64,

    /// 成交时间 (Unix timestamp millis)
    pub created_at: i64,

    /// 顾客快照
    pub customer: Customer,

    /// 行项目
    pub items: Vec<SaleLine>,

    /// 总计 = 各行小计之和 (2 位小数)
    pub total: f64,

    #[serde(default)]
    pub status: SaleStatus,
}

/// One requested line in a checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemInput {
    pub product_id: i64,
    pub quantity: i64,
}

/// Checkout payload (公开收银台)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleCreate {
    pub items: Vec<SaleItemInput>,
    pub customer: Option<Customer>,
}

/// Response wrapper for a committed sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleReceipt {
    pub sale: Sale,
}

/// Aggregated sales statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleStats {
    pub total_sales: i64,
    pub total_amount: f64,
    pub average_sale: f64,
    pub largest_sale: f64,
    pub items_sold: i64,
}
