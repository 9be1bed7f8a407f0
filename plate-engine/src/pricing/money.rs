//! Money conversions between stored `f64` and calculation `Decimal`

use rust_decimal::prelude::*;

/// Monetary values are rounded to 2 decimal places, half away from zero
pub const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum stored prices without f64 drift
pub fn sum_prices<I>(prices: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    to_f64(prices.into_iter().map(to_decimal).sum())
}
