//! Price table and total calculation
//!
//! ```text
//! total = plate_count × (base + style_delta) + fixing_delta
//! ```
//!
//! The fixing kit is charged once per configuration, not per plate. Border,
//! badge, EV strip and size never affect the price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{FixingKit, PlateConfig, PlateStyle};

use super::money::round_money;

/// Style surcharges, charged per plate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePrices {
    pub standard: Decimal,
    #[serde(rename = "3d")]
    pub three_d: Decimal,
    #[serde(rename = "4d")]
    pub four_d: Decimal,
}

impl Default for StylePrices {
    fn default() -> Self {
        Self {
            standard: Decimal::ZERO,
            three_d: Decimal::TEN,
            four_d: Decimal::from(20),
        }
    }
}

/// Fixing kit surcharges, charged once per configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixingPrices {
    pub none: Decimal,
    pub screw: Decimal,
    pub sticky: Decimal,
}

impl Default for FixingPrices {
    fn default() -> Self {
        Self {
            none: Decimal::ZERO,
            screw: Decimal::from(5),
            sticky: Decimal::from(5),
        }
    }
}

/// Price constants
///
/// The default table holds the storefront prices; a JSON file can override
/// any subset of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceTable {
    pub base_per_plate: Decimal,
    pub style: StylePrices,
    pub fixing: FixingPrices,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            base_per_plate: Decimal::from(20),
            style: StylePrices::default(),
            fixing: FixingPrices::default(),
        }
    }
}

/// Line-by-line view of a total
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub plate_count: u32,
    pub plates: Decimal,
    pub style: Decimal,
    pub fixing: Decimal,
    pub total: Decimal,
}

impl PriceTable {
    pub fn style_delta(&self, style: PlateStyle) -> Decimal {
        match style {
            PlateStyle::Standard => self.style.standard,
            PlateStyle::ThreeD => self.style.three_d,
            PlateStyle::FourD => self.style.four_d,
        }
    }

    pub fn fixing_delta(&self, kit: FixingKit) -> Decimal {
        match kit {
            FixingKit::None => self.fixing.none,
            FixingKit::Screw => self.fixing.screw,
            FixingKit::Sticky => self.fixing.sticky,
        }
    }

    pub fn breakdown(&self, config: &PlateConfig) -> PriceBreakdown {
        let plate_count = config.plate_count();
        let count = Decimal::from(plate_count);
        let plates = round_money(self.base_per_plate * count);
        let style = round_money(self.style_delta(config.style) * count);
        let fixing = round_money(self.fixing_delta(config.fixing_kit));

        PriceBreakdown {
            plate_count,
            plates,
            style,
            fixing,
            total: round_money(plates + style + fixing),
        }
    }

    pub fn total(&self, config: &PlateConfig) -> Decimal {
        self.breakdown(config).total
    }
}

/// Total for a configuration using the storefront price table
///
/// A configuration with no plate included collapses to the fixing kit
/// surcharge; submission rejects it separately.
pub fn calculate_total(config: &PlateConfig) -> Decimal {
    PriceTable::default().total(config)
}
