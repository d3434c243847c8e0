//! 收银台提交协议
//!
//! 两阶段提交：先对**所有**行做存在性与库存校验，全部通过后才扣减
//! 库存并记账。任何一行失败时快照不产生任何变更。
//! 同一商品出现在多行时按合计数量校验库存，防止扣成负数。

use std::collections::HashMap;

use chrono::DateTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;

use shared::models::{Customer, Sale, SaleCreate, SaleLine, SaleStats, SaleStatus, WorkDay};

use super::money;
use crate::db::Snapshot;

/// Sale commit errors — validation failures always name the offender
#[derive(Debug, thiserror::Error)]
pub enum SaleError {
    #[error("Sale must contain at least one item")]
    EmptyItems,

    #[error("Quantity must be positive, got {quantity} for product {product_id}")]
    InvalidQuantity { product_id: i64, quantity: i64 },

    #[error("The work day has not been opened, sales cannot be recorded")]
    DayNotOpen,

    #[error("Product {0} not found")]
    ProductNotFound(i64),

    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },
}

impl SaleError {
    /// Stable error code for the API envelope
    pub fn code(&self) -> &'static str {
        match self {
            SaleError::EmptyItems | SaleError::InvalidQuantity { .. } => "INVALID_ITEMS",
            SaleError::DayNotOpen => "DAY_NOT_OPEN",
            SaleError::ProductNotFound(_) => "PRODUCT_NOT_FOUND",
            SaleError::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
        }
    }
}

/// 提交一笔销售
///
/// 步骤 (全部针对同一份快照，整体成功或整体无变更)：
/// 1. 行列表非空、每行数量为正
/// 2. 必须存在 Open 状态的营业日
/// 3. 校验阶段：逐行解析商品、按商品合计数量对比库存
/// 4. 提交阶段：扣库存、构造不可变 Sale、写入全局账本、
///    挂到营业日并更新其累计缓存
pub fn commit_sale(
    snapshot: &mut Snapshot,
    now: DateTime<Tz>,
    input: SaleCreate,
) -> Result<Sale, SaleError> {
    if input.items.is_empty() {
        return Err(SaleError::EmptyItems);
    }
    for item in &input.items {
        if item.quantity <= 0 {
            return Err(SaleError::InvalidQuantity {
                product_id: item.product_id,
                quantity: item.quantity,
            });
        }
    }

    let Some(day_idx) = snapshot.days.iter().position(|d| d.is_open()) else {
        return Err(SaleError::DayNotOpen);
    };

    // ── 校验阶段 — 此处之后才允许修改快照 ──────────────────────
    let mut lines: Vec<SaleLine> = Vec::with_capacity(input.items.len());
    let mut requested: HashMap<i64, i64> = HashMap::new();
    for item in &input.items {
        let product = snapshot
            .products
            .iter()
            .find(|p| p.id == item.product_id)
            .ok_or(SaleError::ProductNotFound(item.product_id))?;

        let required = requested.entry(product.id).or_insert(0);
        *required += item.quantity;
        if product.stock < *required {
            return Err(SaleError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: *required,
            });
        }

        // 名称与单价在此刻快照，之后改目录价不回溯
        lines.push(SaleLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: item.quantity,
            subtotal: money::line_subtotal(product.price, item.quantity),
        });
    }

    // ── 提交阶段 ────────────────────────────────────────────────
    for product in snapshot.products.iter_mut() {
        if let Some(quantity) = requested.get(&product.id) {
            product.stock -= quantity;
        }
    }

    let total = money::sum_money(lines.iter().map(|l| l.subtotal));
    let sale = Sale {
        id: shared::snowflake_id(),
        created_at: now.timestamp_millis(),
        customer: input.customer.unwrap_or_else(Customer::anonymous),
        items: lines,
        total,
        status: SaleStatus::Completed,
    };

    snapshot.sales.push(sale.clone());
    let day = &mut snapshot.days[day_idx];
    day.sale_ids.push(sale.id);
    day.total = money::add_money(day.total, sale.total);

    Ok(sale)
}

/// Resolve the Sale objects belonging to a day, in ledger order
pub fn sales_for_day(snapshot: &Snapshot, day: &WorkDay) -> Vec<Sale> {
    snapshot
        .sales
        .iter()
        .filter(|s| day.sale_ids.contains(&s.id))
        .cloned()
        .collect()
}

/// Aggregate statistics over the whole sales ledger
pub fn sales_stats(sales: &[Sale]) -> SaleStats {
    if sales.is_empty() {
        return SaleStats::default();
    }

    let total_dec: Decimal = sales.iter().map(|s| money::to_decimal(s.total)).sum();
    let count = sales.len() as i64;

    SaleStats {
        total_sales: count,
        total_amount: money::round_money(total_dec),
        average_sale: money::round_money(total_dec / Decimal::from(count)),
        largest_sale: sales.iter().map(|s| s.total).fold(0.0, f64::max),
        items_sold: sales
            .iter()
            .flat_map(|s| s.items.iter())
            .map(|l| l.quantity)
            .sum(),
    }
}
