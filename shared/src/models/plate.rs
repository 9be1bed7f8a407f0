//! Plate Model
//!
//! Configuration of a physical number-plate product. One `PlateConfig`
//! describes a front/rear pair sharing registration and finish.

use serde::{Deserialize, Serialize};

/// Size id every catalog starts with
pub const DEFAULT_SIZE_ID: &str = "standard";

/// Mounting position
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlatePosition {
    Front,
    Rear,
}

impl PlatePosition {
    pub const ALL: [PlatePosition; 2] = [PlatePosition::Front, PlatePosition::Rear];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Rear => "rear",
        }
    }
}

/// Text finish: flat print, domed resin, or laser-cut acrylic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum PlateStyle {
    #[default]
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "3d")]
    ThreeD,
    #[serde(rename = "4d")]
    FourD,
}

impl PlateStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::ThreeD => "3d",
            Self::FourD => "4d",
        }
    }
}

/// Decorative coachline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlateBorder {
    #[default]
    None,
    Red,
    Green,
    Blue,
    Black,
}

/// National identifier shown in the badge area
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlateBadge {
    #[default]
    None,
    Uk,
    Eng,
    Cym,
    Sco,
}

impl PlateBadge {
    /// Letter code printed under the flag (`None` has no code)
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Uk => Some("UK"),
            Self::Eng => Some("ENG"),
            Self::Cym => Some("CYM"),
            Self::Sco => Some("SCO"),
        }
    }
}

/// Mounting hardware bundled with the order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FixingKit {
    #[default]
    None,
    Screw,
    Sticky,
}

/// Named plate size preset (millimetres)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlateSize {
    pub id: String,
    pub label: String,
    pub width: u32,
    pub height: u32,
    /// Near-square formats render the registration on two rows
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub multiline: bool,
}

/// Full plate configuration as edited in the builder and stored in the cart
///
/// Absent fields deserialize to the builder defaults so older persisted
/// carts still rehydrate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlateConfig {
    pub reg: String,
    pub size_front: String,
    pub size_rear: String,
    pub include_front: bool,
    pub include_rear: bool,
    pub style: PlateStyle,
    pub border: PlateBorder,
    pub badge: PlateBadge,
    pub ev_strip: bool,
    pub fixing_kit: FixingKit,
}

impl Default for PlateConfig {
    fn default() -> Self {
        Self {
            reg: String::new(),
            size_front: DEFAULT_SIZE_ID.to_string(),
            size_rear: DEFAULT_SIZE_ID.to_string(),
            include_front: true,
            include_rear: true,
            style: PlateStyle::Standard,
            border: PlateBorder::None,
            badge: PlateBadge::None,
            ev_strip: false,
            fixing_kit: FixingKit::None,
        }
    }
}

impl PlateConfig {
    /// Number of physical plates ordered (0, 1 or 2)
    pub fn plate_count(&self) -> u32 {
        u32::from(self.include_front) + u32::from(self.include_rear)
    }

    pub fn has_any_plate(&self) -> bool {
        self.include_front || self.include_rear
    }

    pub fn size_id(&self, position: PlatePosition) -> &str {
        match position {
            PlatePosition::Front => &self.size_front,
            PlatePosition::Rear => &self.size_rear,
        }
    }

    pub fn is_included(&self, position: PlatePosition) -> bool {
        match position {
            PlatePosition::Front => self.include_front,
            PlatePosition::Rear => self.include_rear,
        }
    }

    // ========== Copy-on-write updates ==========

    pub fn with_reg(mut self, reg: impl Into<String>) -> Self {
        self.reg = reg.into();
        self
    }

    pub fn with_size(mut self, position: PlatePosition, size_id: impl Into<String>) -> Self {
        match position {
            PlatePosition::Front => self.size_front = size_id.into(),
            PlatePosition::Rear => self.size_rear = size_id.into(),
        }
        self
    }

    pub fn with_included(mut self, position: PlatePosition, included: bool) -> Self {
        match position {
            PlatePosition::Front => self.include_front = included,
            PlatePosition::Rear => self.include_rear = included,
        }
        self
    }

    pub fn with_style(mut self, style: PlateStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_border(mut self, border: PlateBorder) -> Self {
        self.border = border;
        self
    }

    pub fn with_badge(mut self, badge: PlateBadge) -> Self {
        self.badge = badge;
        self
    }

    pub fn with_ev_strip(mut self, ev_strip: bool) -> Self {
        self.ev_strip = ev_strip;
        self
    }

    pub fn with_fixing_kit(mut self, fixing_kit: FixingKit) -> Self {
        self.fixing_kit = fixing_kit;
        self
    }
}
