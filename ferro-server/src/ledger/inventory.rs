//! 库存操作 (补货 / 低库存 / 采购收货)

use shared::models::{LowStockReport, Product, PurchaseOrderLine};

use crate::db::Snapshot;

/// 手工补货 — 商品不存在时返回 None
pub fn restock(snapshot: &mut Snapshot, product_id: i64, quantity: i64) -> Option<Product> {
    let product = snapshot.products.iter_mut().find(|p| p.id == product_id)?;
    product.stock += quantity;
    Some(product.clone())
}

/// 低库存报表 — stock 严格小于阈值的商品
pub fn low_stock(snapshot: &Snapshot, threshold: i64) -> LowStockReport {
    let products: Vec<Product> = snapshot
        .products
        .iter()
        .filter(|p| p.stock < threshold)
        .cloned()
        .collect();
    LowStockReport {
        threshold,
        count: products.len(),
        products,
    }
}

/// 采购单收货 — 将每行数量加到对应商品库存
///
/// 下单后被删除的商品行无法入库，跳过并告警。
pub fn apply_received_lines(products: &mut [Product], lines: &[PurchaseOrderLine]) {
    for line in lines {
        match products.iter_mut().find(|p| p.id == line.product_id) {
            Some(product) => product.stock += line.quantity,
            None => tracing::warn!(
                "Received purchase line for unknown product {}, stock not adjusted",
                line.product_id
            ),
        }
    }
}
