//! Checkout handoff
//!
//! Flattens the cart into an order request and passes it to an
//! [`OrderGateway`]. The cart is cleared only once the gateway confirms the
//! order, so a failed submission leaves every item in place for a retry.

use shared::error::{AppError, ErrorCode};
use shared::models::{CheckoutItem, CreateOrderRequest, CustomerDetails, Order};

use crate::cart::{Cart, CartStorage};

/// Order submission collaborator
pub trait OrderGateway {
    fn place_order(&self, request: &CreateOrderRequest) -> Result<Order, AppError>;
}

/// Order request for the current cart contents
pub fn build_request<S: CartStorage>(cart: &Cart<S>, customer: CustomerDetails) -> CreateOrderRequest {
    CreateOrderRequest {
        customer,
        items: cart.items().iter().map(CheckoutItem::from).collect(),
        total: cart.subtotal(),
    }
}

pub fn place_order<S, G>(
    cart: &mut Cart<S>,
    customer: CustomerDetails,
    gateway: &G,
) -> Result<Order, AppError>
where
    S: CartStorage,
    G: OrderGateway + ?Sized,
{
    if cart.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }

    let request = build_request(cart, customer);
    let order = gateway.place_order(&request).inspect_err(|e| {
        tracing::warn!(code = %e.code, error = %e.message, "Order submission failed, cart kept");
    })?;

    tracing::info!(order_id = %order.id, total = order.total, "Order placed");
    cart.clear();
    Ok(order)
}
