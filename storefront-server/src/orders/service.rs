//! Order creation rules
//!
//! Checks run before anything is stored:
//!
//! 1. customer fields (name, email, lengths) via `validator`
//! 2. at least one order line once address markers are removed
//! 3. a finite total greater than zero
//!
//! Every failure answers with "Missing required fields".

use chrono::{DateTime, Utc};
use shared::models::{CreateOrderRequest, CustomerDetails, Order, OrderItem, OrderStatus};
use uuid::Uuid;
use validator::Validate;

use crate::utils::{AppError, AppResult, ErrorCode};

const MISSING_FIELDS: &str = "Missing required fields";

/// Build a PENDING order from a checkout request
pub fn prepare_order(request: CreateOrderRequest, now: DateTime<Utc>) -> AppResult<Order> {
    request.validate()?;

    if !request.total.is_finite() || request.total <= 0.0 {
        return Err(AppError::with_message(ErrorCode::OrderInvalidTotal, MISSING_FIELDS)
            .with_detail("total", request.total));
    }

    let CreateOrderRequest {
        mut customer,
        items,
        total,
    } = request;

    if customer.address.is_empty()
        && let Some(marker) = items.iter().find(|item| item.is_address)
    {
        apply_address_marker(
            &mut customer,
            marker.address.as_deref(),
            marker.city.as_deref(),
            marker.postal_code.as_deref(),
        );
    }

    let items: Vec<OrderItem> = items
        .into_iter()
        .filter_map(|item| item.into_order_item())
        .collect();
    if items.is_empty() {
        return Err(AppError::with_message(ErrorCode::OrderEmpty, MISSING_FIELDS)
            .with_detail("items", "no order lines"));
    }

    Ok(Order {
        id: Uuid::new_v4().to_string(),
        customer,
        items,
        total,
        status: OrderStatus::Pending,
        created_at: now,
        updated_at: now,
    })
}

fn apply_address_marker(
    customer: &mut CustomerDetails,
    address: Option<&str>,
    city: Option<&str>,
    postal_code: Option<&str>,
) {
    customer.address = address.unwrap_or_default().to_string();
    customer.city = city.unwrap_or_default().to_string();
    customer.postal_code = postal_code.unwrap_or_default().to_string();
}

/// Plain-text confirmation, one line per item
pub fn confirmation_summary(order: &Order) -> String {
    let mut lines = vec![
        format!("Order ID: {}", order.id),
        format!("Total Amount: £{}", order.total),
    ];
    lines.extend(
        order
            .items
            .iter()
            .map(|item| format!("- {}: £{}", item.label(), item.price)),
    );
    lines.push(format!(
        "Ship to: {}, {}, {}",
        order.customer.address, order.customer.city, order.customer.postal_code
    ));
    if let Some(phone) = order.customer.phone_number.as_deref().filter(|p| !p.is_empty()) {
        lines.push(format!("Phone: {phone}"));
    }
    lines.join("\n")
}
