//! Work Day API 模块 (营业日管理)

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/days", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/status", get(handler::status))
        .route("/open", post(handler::open))
        .route("/close", post(handler::close))
        .route("/{id}", get(handler::get_by_id))
}
