//! Order Repository
//!
//! In-memory order book backed by `DashMap`. Cloning shares the map.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use plate_engine::OrderGateway;
use shared::models::{CreateOrderRequest, Order, OrderStatus};

use super::service::{confirmation_summary, prepare_order};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Clone, Default)]
pub struct OrderRepository {
    orders: Arc<DashMap<String, Order>>,
}

impl OrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a new PENDING order
    pub fn create(&self, request: CreateOrderRequest) -> AppResult<Order> {
        let order = prepare_order(request, Utc::now())?;
        tracing::info!(
            order_id = %order.id,
            customer_email = %order.customer.customer_email,
            total = order.total,
            items = order.items.len(),
            "Order placed"
        );
        tracing::debug!("Order confirmation:\n{}", confirmation_summary(&order));

        self.orders.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    /// Store an order as-is (imports and fixtures)
    pub fn insert(&self, order: Order) {
        self.orders.insert(order.id.clone(), order);
    }

    pub fn find_by_id(&self, id: &str) -> Option<Order> {
        self.orders.get(id).map(|entry| entry.value().clone())
    }

    /// All orders, newest first
    pub fn find_all(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.orders.iter().map(|entry| entry.value().clone()).collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        orders
    }

    /// Move an order along its lifecycle
    ///
    /// Setting the current status again is a no-op; any other move must be
    /// allowed by [`OrderStatus::can_transition_to`].
    pub fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        let mut entry = self
            .orders
            .get_mut(id)
            .ok_or_else(|| AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found")))?;
        let order = entry.value_mut();

        if order.status == status {
            return Ok(order.clone());
        }
        if !order.status.can_transition_to(status) {
            return Err(AppError::with_message(
                ErrorCode::OrderInvalidStatusTransition,
                format!(
                    "Cannot change order status from {} to {}",
                    order.status.as_str(),
                    status.as_str()
                ),
            ));
        }

        tracing::info!(
            order_id = %id,
            from = order.status.as_str(),
            to = status.as_str(),
            "Order status updated"
        );
        order.status = status;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderGateway for OrderRepository {
    fn place_order(&self, request: &CreateOrderRequest) -> Result<Order, AppError> {
        self.create(request.clone())
    }
}
