//! Store Info API 模块 (店铺信息)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/store-info", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::get_info).put(handler::update))
}
