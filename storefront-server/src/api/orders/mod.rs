//! Order API Module
//!
//! Checkout submits here; the admin views list, inspect and advance orders.

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).patch(handler::update_status))
}
