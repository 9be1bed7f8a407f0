//! API routes
//!
//! - [`health`] - liveness
//! - [`plates`] - size catalog, validation, quotes and cart items
//! - [`orders`] - order submission, listing, detail and status
//! - [`admin`] - dashboard statistics

pub mod admin;
pub mod health;
pub mod orders;
pub mod plates;

use axum::Router;

use crate::core::ServerState;

/// All routes, without state or middleware
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(plates::router())
        .merge(orders::router())
        .merge(admin::router())
}
