//! Plate API Module
//!
//! Stateless plate-engine operations exposed to the storefront.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/plates", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/sizes", get(handler::list_sizes))
        .route("/validate", post(handler::validate))
        .route("/quote", post(handler::quote))
        .route("/cart-item", post(handler::create_cart_item))
}
