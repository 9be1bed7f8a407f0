//! Plate pricing
//!
//! Totals are computed in `Decimal` and stored as `f64` on cart items and
//! orders.

mod money;
mod table;

pub use money::*;
pub use table::*;
