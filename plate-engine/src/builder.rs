//! Plate builder state
//!
//! Each update is a discrete, synchronous transition on an owned
//! [`PlateConfig`]. Submission checks run in a fixed order and the first
//! failing check wins:
//!
//! 1. empty registration → [`PlateError::RegistrationRequired`]
//! 2. per-keystroke validation error → that error
//! 3. no plate included → [`PlateError::NoPlateSelected`]

use rust_decimal::Decimal;
use shared::models::{
    CartItem, FixingKit, PlateBadge, PlateBorder, PlateConfig, PlatePosition, PlateStyle,
};
use uuid::Uuid;

use crate::cart::CartSink;
use crate::error::PlateError;
use crate::pricing::{PriceBreakdown, PriceTable, to_f64};
use crate::registration::{normalize, validate};
use crate::render::{PlateView, render_plates};

/// One variant per editable field
#[derive(Debug, Clone, PartialEq)]
pub enum PlateUpdate {
    /// Raw keystroke input, normalized before it is stored
    Reg(String),
    Size(PlatePosition, String),
    Include(PlatePosition, bool),
    Style(PlateStyle),
    Border(PlateBorder),
    Badge(PlateBadge),
    EvStrip(bool),
    FixingKit(FixingKit),
}

#[derive(Debug, Clone, Default)]
pub struct PlateBuilder {
    config: PlateConfig,
    error: Option<PlateError>,
    prices: PriceTable,
}

impl PlateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prices(prices: PriceTable) -> Self {
        Self {
            prices,
            ..Self::default()
        }
    }

    /// Resume editing an existing configuration (e.g. from a cart line)
    pub fn from_config(config: PlateConfig) -> Self {
        let error = validate(&config.reg).err();
        Self {
            config,
            error,
            prices: PriceTable::default(),
        }
    }

    pub fn config(&self) -> &PlateConfig {
        &self.config
    }

    /// Inline error currently shown next to the input
    pub fn error(&self) -> Option<PlateError> {
        self.error
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Normalize and validate a keystroke, returning the inline error
    pub fn input_reg(&mut self, raw: &str) -> Option<PlateError> {
        self.apply(PlateUpdate::Reg(raw.to_string()));
        self.error
    }

    pub fn apply(&mut self, update: PlateUpdate) {
        let config = std::mem::take(&mut self.config);
        self.config = match update {
            PlateUpdate::Reg(raw) => {
                let reg = normalize(&raw);
                self.error = validate(&reg).err();
                config.with_reg(reg)
            }
            PlateUpdate::Size(position, id) => config.with_size(position, id),
            PlateUpdate::Include(position, included) => config.with_included(position, included),
            PlateUpdate::Style(style) => config.with_style(style),
            PlateUpdate::Border(border) => config.with_border(border),
            PlateUpdate::Badge(badge) => config.with_badge(badge),
            PlateUpdate::EvStrip(on) => config.with_ev_strip(on),
            PlateUpdate::FixingKit(kit) => config.with_fixing_kit(kit),
        };
    }

    pub fn total(&self) -> Decimal {
        self.prices.total(&self.config)
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        self.prices.breakdown(&self.config)
    }

    /// Live preview of the included plates
    pub fn views(&self) -> Vec<PlateView> {
        render_plates(&self.config)
    }

    /// Validate, price and hand the item to `cart`
    ///
    /// On failure the config is untouched and the error becomes the inline
    /// message.
    pub fn submit<C: CartSink + ?Sized>(&mut self, cart: &mut C) -> Result<CartItem, PlateError> {
        match submit_with(&self.config, &self.prices) {
            Ok(item) => {
                self.error = None;
                cart.add_item(item.clone());
                Ok(item)
            }
            Err(e) => {
                self.error = Some(e);
                Err(e)
            }
        }
    }
}

/// Build a cart item using the storefront price table
pub fn submit(config: &PlateConfig) -> Result<CartItem, PlateError> {
    submit_with(config, &PriceTable::default())
}

pub fn submit_with(config: &PlateConfig, prices: &PriceTable) -> Result<CartItem, PlateError> {
    let reg = normalize(&config.reg);
    if reg.is_empty() {
        return Err(PlateError::RegistrationRequired);
    }
    validate(&reg)?;
    if !config.has_any_plate() {
        return Err(PlateError::NoPlateSelected);
    }

    let config = config.clone().with_reg(reg.clone());
    let price = to_f64(prices.total(&config));
    let item = CartItem {
        id: Uuid::new_v4().to_string(),
        reg,
        price,
        config,
    };
    tracing::debug!(id = %item.id, reg = %item.reg, price, "Plate configuration submitted");
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_with(reg: &str) -> PlateBuilder {
        let mut builder = PlateBuilder::new();
        builder.input_reg(reg);
        builder
    }

    #[test]
    fn test_input_reg_normalizes_and_validates() {
        let mut builder = PlateBuilder::new();
        assert_eq!(builder.input_reg("ab12 cd-e"), None);
        assert_eq!(builder.config().reg, "AB12 CDE");

        assert_eq!(builder.input_reg("toolongreg123"), Some(PlateError::TooLong));
        assert_eq!(builder.config().reg, "TOOLONGREG123");
        assert_eq!(builder.error(), Some(PlateError::TooLong));

        assert_eq!(builder.input_reg(""), None);
        assert_eq!(builder.error(), None);
    }

    #[test]
    fn test_scenario_pair_3d_sticky() {
        let mut builder = builder_with("AB12CDE");
        builder.apply(PlateUpdate::Style(PlateStyle::ThreeD));
        builder.apply(PlateUpdate::FixingKit(FixingKit::Sticky));
        assert_eq!(builder.total(), Decimal::from(65));

        let mut cart: Vec<CartItem> = Vec::new();
        let item = builder.submit(&mut cart).unwrap();
        assert_eq!(item.price, 65.0);
        assert_eq!(item.reg, "AB12CDE");
        assert_eq!(item.config, *builder.config());
        assert_eq!(cart, vec![item]);
    }

    #[test]
    fn test_empty_reg_is_required() {
        let mut builder = PlateBuilder::new();
        let mut cart: Vec<CartItem> = Vec::new();
        assert_eq!(builder.submit(&mut cart), Err(PlateError::RegistrationRequired));
        assert_eq!(builder.error(), Some(PlateError::RegistrationRequired));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_too_long_blocks_submission() {
        let mut builder = builder_with("TOOLONGREG123");
        let mut cart: Vec<CartItem> = Vec::new();
        assert_eq!(builder.submit(&mut cart), Err(PlateError::TooLong));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_no_plate_selected() {
        let mut builder = builder_with("X1");
        builder.apply(PlateUpdate::Include(PlatePosition::Front, false));
        builder.apply(PlateUpdate::Include(PlatePosition::Rear, false));
        let before = builder.config().clone();

        let mut cart: Vec<CartItem> = Vec::new();
        assert_eq!(builder.submit(&mut cart), Err(PlateError::NoPlateSelected));
        assert_eq!(builder.config(), &before);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_check_order_first_failure_wins() {
        let none_selected = PlateConfig::default()
            .with_included(PlatePosition::Front, false)
            .with_included(PlatePosition::Rear, false);

        assert_eq!(
            submit(&none_selected.clone().with_reg("")),
            Err(PlateError::RegistrationRequired)
        );
        assert_eq!(
            submit(&none_selected.clone().with_reg("TOOLONGREG123")),
            Err(PlateError::TooLong)
        );
        assert_eq!(
            submit(&none_selected.with_reg("X1")),
            Err(PlateError::NoPlateSelected)
        );
    }

    #[test]
    fn test_whitespace_only_reg_passes_required_check() {
        let config = PlateConfig::default().with_reg("   ");
        let item = submit(&config).unwrap();
        assert_eq!(item.reg, "   ");
        assert_eq!(item.price, 40.0);

        let none_selected = config
            .with_included(PlatePosition::Front, false)
            .with_included(PlatePosition::Rear, false);
        assert_eq!(submit(&none_selected), Err(PlateError::NoPlateSelected));
    }

    #[test]
    fn test_submit_normalizes_raw_config() {
        let config = PlateConfig::default().with_reg("ab12 cde");
        let item = submit(&config).unwrap();
        assert_eq!(item.reg, "AB12 CDE");
        assert_eq!(item.config.reg, "AB12 CDE");
    }

    #[test]
    fn test_recover_after_error() {
        let mut builder = PlateBuilder::new();
        let mut cart: Vec<CartItem> = Vec::new();
        assert!(builder.submit(&mut cart).is_err());

        builder.input_reg("X1");
        assert!(builder.submit(&mut cart).is_ok());
        assert_eq!(builder.error(), None);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_submit_ids_are_unique() {
        let config = PlateConfig::default().with_reg("X1");
        let first = submit(&config).unwrap();
        let second = submit(&config).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_apply_updates_each_field() {
        let mut builder = PlateBuilder::new();
        builder.apply(PlateUpdate::Reg("x1".into()));
        builder.apply(PlateUpdate::Size(PlatePosition::Rear, "jag_xk8".into()));
        builder.apply(PlateUpdate::Border(PlateBorder::Blue));
        builder.apply(PlateUpdate::Badge(PlateBadge::Sco));
        builder.apply(PlateUpdate::EvStrip(true));

        let config = builder.config();
        assert_eq!(config.reg, "X1");
        assert_eq!(config.size_rear, "jag_xk8");
        assert_eq!(config.border, PlateBorder::Blue);
        assert_eq!(config.badge, PlateBadge::Sco);
        assert!(config.ev_strip);
        assert_eq!(builder.total(), Decimal::from(40));
    }

    #[test]
    fn test_custom_price_table() {
        let prices = PriceTable {
            base_per_plate: Decimal::new(2250, 2),
            ..PriceTable::default()
        };
        let mut builder = PlateBuilder::with_prices(prices);
        builder.input_reg("X1");
        builder.apply(PlateUpdate::Include(PlatePosition::Rear, false));
        assert_eq!(builder.submit(&mut Vec::<CartItem>::new()).unwrap().price, 22.5);
    }

    #[test]
    fn test_from_config_reports_existing_error() {
        let builder = PlateBuilder::from_config(PlateConfig::default().with_reg("TOOLONGREG123"));
        assert_eq!(builder.error(), Some(PlateError::TooLong));
    }

    #[test]
    fn test_views_follow_included_plates() {
        let mut builder = builder_with("X1");
        assert_eq!(builder.views().len(), 2);
        builder.apply(PlateUpdate::Include(PlatePosition::Front, false));
        assert_eq!(builder.views().len(), 1);
    }
}
