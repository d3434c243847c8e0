//! Purchase Order API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::ledger::{inventory, money};
use crate::utils::validation::validate_money;
use crate::utils::{AppError, AppResult};
use shared::models::{
    PurchaseOrder, PurchaseOrderCreate, PurchaseOrderLine, PurchaseOrderStatus,
    PurchaseOrderStatusUpdate,
};

/// GET /api/purchase-orders - 全部采购单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PurchaseOrder>>> {
    let snapshot = state.store.load()?;
    Ok(Json(snapshot.purchase_orders))
}

/// GET /api/purchase-orders/{id} - 单个采购单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PurchaseOrder>> {
    let snapshot = state.store.load()?;
    let order = snapshot
        .purchase_orders
        .into_iter()
        .find(|o| o.id == id)
        .ok_or_else(|| AppError::not_found(format!("Purchase order {} not found", id)))?;
    Ok(Json(order))
}

/// POST /api/purchase-orders - 新建采购单
///
/// 供应商必须存在；行小计与总额用 Decimal 计算。
/// 行上的商品名优先取请求里的快照，缺省时从目录解析。
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<PurchaseOrderCreate>,
) -> AppResult<Json<PurchaseOrder>> {
    if payload.lines.is_empty() {
        return Err(AppError::validation("Purchase order needs at least one line"));
    }
    for line in &payload.lines {
        if line.quantity <= 0 {
            return Err(AppError::validation(format!(
                "quantity must be positive, got {} for product {}",
                line.quantity, line.product_id
            )));
        }
        validate_money(line.unit_cost, "unitCost")?;
    }

    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let supplier = snapshot
        .suppliers
        .iter()
        .find(|s| s.id == payload.supplier_id)
        .ok_or_else(|| {
            AppError::not_found(format!("Supplier {} not found", payload.supplier_id))
        })?;

    let lines: Vec<PurchaseOrderLine> = payload
        .lines
        .into_iter()
        .map(|line| {
            let product_name = line.product_name.unwrap_or_else(|| {
                snapshot
                    .products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default()
            });
            PurchaseOrderLine {
                product_id: line.product_id,
                product_name,
                quantity: line.quantity,
                unit_cost: line.unit_cost,
                subtotal: money::line_subtotal(line.unit_cost, line.quantity),
            }
        })
        .collect();

    let order = PurchaseOrder {
        id: shared::snowflake_id(),
        supplier_id: supplier.id,
        supplier_name: supplier.name.clone(),
        created_at: shared::now_millis(),
        expected_at: payload.expected_at,
        status: PurchaseOrderStatus::Pending,
        total: money::sum_money(lines.iter().map(|l| l.subtotal)),
        lines,
    };
    snapshot.purchase_orders.push(order.clone());
    state.store.save(&snapshot)?;

    tracing::info!(
        operator = %current_user.username,
        order_id = order.id,
        supplier = %order.supplier_name,
        total = order.total,
        "Purchase order created"
    );
    Ok(Json(order))
}

/// PUT /api/purchase-orders/{id}/status - 更新采购单状态
///
/// 转入 Received 时把每行数量入库；已入库的单子不允许再次入库。
pub async fn set_status(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<PurchaseOrderStatusUpdate>,
) -> AppResult<Json<PurchaseOrder>> {
    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let idx = snapshot
        .purchase_orders
        .iter()
        .position(|o| o.id == id)
        .ok_or_else(|| AppError::not_found(format!("Purchase order {} not found", id)))?;

    if payload.status == PurchaseOrderStatus::Received {
        if snapshot.purchase_orders[idx].status == PurchaseOrderStatus::Received {
            return Err(AppError::BusinessRule {
                code: "ALREADY_RECEIVED",
                message: format!("Purchase order {} was already received", id),
            });
        }
        let lines = snapshot.purchase_orders[idx].lines.clone();
        inventory::apply_received_lines(&mut snapshot.products, &lines);
    }

    snapshot.purchase_orders[idx].status = payload.status;
    let updated = snapshot.purchase_orders[idx].clone();
    state.store.save(&snapshot)?;

    tracing::info!(
        operator = %current_user.username,
        order_id = id,
        status = ?updated.status,
        "Purchase order status updated"
    );
    Ok(Json(updated))
}

/// DELETE /api/purchase-orders/{id} - 删除采购单
pub async fn remove(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<PurchaseOrder>> {
    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let idx = snapshot
        .purchase_orders
        .iter()
        .position(|o| o.id == id)
        .ok_or_else(|| AppError::not_found(format!("Purchase order {} not found", id)))?;
    let removed = snapshot.purchase_orders.remove(idx);
    state.store.save(&snapshot)?;

    tracing::info!(operator = %current_user.username, order_id = id, "Purchase order deleted");
    Ok(Json(removed))
}
