//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use plate_engine::{PlateView, render_plates};
use serde::Serialize;
use shared::models::{CreateOrderRequest, Order, OrderStatusUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Serialize)]
pub struct OrderCreated {
    pub message: &'static str,
    pub order: Order,
}

/// Rendered plates for one plate line of an order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPreview {
    pub item_index: usize,
    pub label: String,
    pub plates: Vec<PlateView>,
}

#[derive(Debug, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub previews: Vec<ItemPreview>,
}

/// List all orders, newest first
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Order>> {
    Json(state.orders.find_all())
}

/// Create an order from the checkout payload
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<OrderCreated>)> {
    let order = state.orders.create(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            message: "Order placed successfully",
            order,
        }),
    ))
}

/// Order detail with the same plate views the storefront preview shows
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderDetail>> {
    let order = find_order(&state, &id)?;
    let previews = order
        .items
        .iter()
        .enumerate()
        .filter_map(|(item_index, item)| {
            item.config.as_ref().map(|config| ItemPreview {
                item_index,
                label: item.label(),
                plates: render_plates(config),
            })
        })
        .collect();
    Ok(Json(OrderDetail { order, previews }))
}

/// Advance the order status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = state.orders.update_status(&id, payload.status)?;
    Ok(Json(order))
}

fn find_order(state: &ServerState, id: &str) -> AppResult<Order> {
    state
        .orders
        .find_by_id(id)
        .ok_or_else(|| AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found")))
}
