//! Admin dashboard statistics

use std::collections::BTreeMap;

use chrono::NaiveDate;
use plate_engine::pricing::{to_decimal, to_f64};
use rust_decimal::Decimal;
use shared::models::{AdminStats, Order, OrderStatus, SalesPoint};

/// Number of most recent sales days shown on the chart
pub const SALES_CHART_DAYS: usize = 7;

/// Totals across every order plus daily sales for the latest days
///
/// Days are UTC calendar dates of `created_at`; only days with orders appear.
pub fn compute_stats(orders: &[Order]) -> AdminStats {
    let total_earnings: Decimal = orders.iter().map(|o| to_decimal(o.total)).sum();
    let pending_orders = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count();

    let mut by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for order in orders {
        *by_date.entry(order.created_at.date_naive()).or_default() += to_decimal(order.total);
    }

    let skip = by_date.len().saturating_sub(SALES_CHART_DAYS);
    let recent_sales_chart = by_date
        .into_iter()
        .skip(skip)
        .map(|(date, sales)| SalesPoint {
            date: date.format("%Y-%m-%d").to_string(),
            sales: to_f64(sales),
        })
        .collect();

    AdminStats {
        total_orders: orders.len(),
        total_earnings: to_f64(total_earnings),
        pending_orders,
        recent_sales_chart,
    }
}
