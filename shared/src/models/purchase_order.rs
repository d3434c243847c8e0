//! Purchase Order Model (采购单)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseOrderStatus {
    Pending,
    InTransit,
    Received,
    Cancelled,
}

impl Default for PurchaseOrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// One ordered line; cost and name are captured at order time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderLine {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_cost: f64,
    pub subtotal: f64,
}

/// Purchase order with its lines embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: i64,
    pub supplier_id: i64,
    /// 供应商名称快照
    pub supplier_name: String,
    pub created_at: i64,
    pub expected_at: Option<i64>,
    #[serde(default)]
    pub status: PurchaseOrderStatus,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub lines: Vec<PurchaseOrderLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderLineInput {
    pub product_id: i64,
    pub product_name: Option<String>,
    pub quantity: i64,
    pub unit_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderCreate {
    pub supplier_id: i64,
    pub expected_at: Option<i64>,
    pub lines: Vec<PurchaseOrderLineInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderStatusUpdate {
    pub status: PurchaseOrderStatus,
}
