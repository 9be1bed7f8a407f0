//! Order Model
//!
//! Orders mix plate lines (`reg` + `config`) and car purchases
//! (`make` + `model`) in one items array.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{CartItem, PlateConfig};

/// Order status lifecycle
///
/// `PENDING → PROCESSING → SHIPPED → DELIVERED`, or `CANCELLED` from any
/// non-terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether an admin may move an order from `self` to `next`
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match (self, next) {
            (from, Cancelled) => !from.is_terminal(),
            (Pending, Processing) | (Processing, Shipped) | (Shipped, Delivered) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// Stored order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Price in currency unit
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<PlateConfig>,
}

impl OrderItem {
    /// Display label: registration for plates, "make model" for cars
    pub fn label(&self) -> String {
        if let Some(reg) = self.reg.as_deref().filter(|r| !r.is_empty()) {
            return reg.to_string();
        }
        let name: Vec<&str> = [self.make.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if name.is_empty() {
            "Item".to_string()
        } else {
            name.join(" ")
        }
    }

    pub fn is_plate(&self) -> bool {
        self.config.is_some()
    }
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            reg: Some(item.reg.clone()),
            make: None,
            model: None,
            price: item.price,
            config: Some(item.config.clone()),
        }
    }
}

/// Line as posted by the checkout page
///
/// Older checkout pages append an address marker (`isAddress: true`) to the
/// items array instead of sending the address fields at the top level.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutItem {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_address: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PlateConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl CheckoutItem {
    /// Order line for this entry, `None` for address markers
    pub fn into_order_item(self) -> Option<OrderItem> {
        if self.is_address {
            return None;
        }
        Some(OrderItem {
            id: self.id,
            reg: self.reg,
            make: self.make,
            model: self.model,
            price: self.price,
            config: self.config,
        })
    }
}

impl From<&CartItem> for CheckoutItem {
    fn from(item: &CartItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            reg: Some(item.reg.clone()),
            price: item.price,
            config: Some(item.config.clone()),
            ..Default::default()
        }
    }
}

/// Customer and shipping details collected at checkout
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDetails {
    #[validate(length(min = 1, max = 200))]
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub phone_number: Option<String>,
    #[validate(length(max = 500))]
    pub address: String,
    #[validate(length(max = 100))]
    pub city: String,
    #[validate(length(max = 20))]
    pub postal_code: String,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub customer: CustomerDetails,
    #[serde(default)]
    pub items: Vec<CheckoutItem>,
    #[serde(default)]
    pub total: f64,
}

/// Update order status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(flatten)]
    pub customer: CustomerDetails,
    pub items: Vec<OrderItem>,
    /// Total amount in currency unit
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One bar of the admin sales chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesPoint {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub sales: f64,
}

/// Admin dashboard summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_orders: usize,
    pub total_earnings: f64,
    pub pending_orders: usize,
    pub recent_sales_chart: Vec<SalesPoint>,
}
