//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 登录与会话
//! - [`schedule`] - 营业时段配置
//! - [`store_info`] - 店铺信息
//! - [`categories`] - 分类管理
//! - [`products`] - 商品与库存
//! - [`sales`] - 收银台与销售账本
//! - [`days`] - 营业日开市/收市
//! - [`refunds`] - 退款
//! - [`suppliers`] - 供应商
//! - [`purchase_orders`] - 采购单

pub mod auth;
pub mod categories;
pub mod days;
pub mod health;
pub mod products;
pub mod purchase_orders;
pub mod refunds;
pub mod sales;
pub mod schedule;
pub mod store_info;
pub mod suppliers;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(schedule::router())
        .merge(store_info::router())
        .merge(categories::router())
        .merge(products::router())
        .merge(sales::router())
        .merge(days::router())
        .merge(refunds::router())
        .merge(suppliers::router())
        .merge(purchase_orders::router())
}

/// Build a fully configured application with all middleware
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // 认证 - 在路由前执行，校验令牌并注入 CurrentUser
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ))
}
