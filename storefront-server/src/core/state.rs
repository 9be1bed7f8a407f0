use std::sync::Arc;

use plate_engine::PriceTable;

use crate::core::{Config, Result, ServerError};
use crate::orders::OrderRepository;

/// Shared state handed to every handler
///
/// Cloning is cheap: the price table and the order map are shared.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | immutable configuration |
/// | prices | price table used for quotes and cart items |
/// | orders | in-memory order book |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub prices: Arc<PriceTable>,
    pub orders: OrderRepository,
}

impl ServerState {
    pub fn new(config: Config, prices: PriceTable) -> Self {
        Self {
            config,
            prices: Arc::new(prices),
            orders: OrderRepository::new(),
        }
    }

    /// Build the state, loading the price table file when configured
    pub fn initialize(config: &Config) -> Result<Self> {
        let prices = load_price_table(config)?;
        tracing::info!(
            base_per_plate = %prices.base_per_plate,
            "Price table ready"
        );
        Ok(Self::new(config.clone(), prices))
    }
}

fn load_price_table(config: &Config) -> Result<PriceTable> {
    let Some(path) = config.price_table_path() else {
        return Ok(PriceTable::default());
    };
    let content = std::fs::read_to_string(&path)?;
    let table = serde_json::from_str(&content).map_err(|source| ServerError::PriceTable {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Loaded price table file");
    Ok(table)
}
