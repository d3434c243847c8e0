//! Schedule API 模块 (营业时段配置)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/schedule", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::get_schedule).put(handler::update))
}
