//! Product Model

use serde::{Deserialize, Serialize};

/// Product model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Units on hand; decremented by sale commits, incremented by
    /// restocks and received purchase orders.
    #[serde(default)]
    pub stock: i64,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub stock: i64,
    pub price: f64,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i64>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

/// Restock payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockRequest {
    pub quantity: i64,
}

/// Low-stock query result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockReport {
    pub threshold: i64,
    pub count: usize,
    pub products: Vec<Product>,
}
