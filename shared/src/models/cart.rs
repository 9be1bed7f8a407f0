//! Cart Item Model

use serde::{Deserialize, Serialize};

use super::PlateConfig;

/// Plate line in the shopping cart
///
/// `price` is the total computed when the item was added and is never
/// recomputed; `config` is the full snapshot used to re-render the plates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub reg: String,
    /// Price in currency unit
    pub price: f64,
    pub config: PlateConfig,
}
