//! Admin API Handlers

use axum::{Json, extract::State};
use shared::models::AdminStats;

use crate::core::ServerState;
use crate::orders::compute_stats;

/// Dashboard totals and the recent sales chart
pub async fn stats(State(state): State<ServerState>) -> Json<AdminStats> {
    Json(compute_stats(&state.orders.find_all()))
}
