//! Plate rendering contract
//!
//! Data, not pixels: a [`PlateView`] is everything a renderer needs to draw
//! one plate. The storefront preview, cart drawer, invoice and admin order
//! view all derive it from the same `(PlateConfig, position)` pair so they
//! always agree.

use serde::Serialize;
use shared::models::{PlateBadge, PlateBorder, PlateConfig, PlatePosition, PlateSize, PlateStyle};

use crate::sizes::{aspect_ratio, resolve_size};

/// Shown when no registration has been typed yet
pub const PLACEHOLDER_REG: &str = "REG PRES";

/// Standard marking printed along the bottom edge of every plate
pub const LEGAL_MARKING: &str = "BS AU 145e";

/// Badge area width as a percentage of the plate width
const BADGE_WIDTH_MULTILINE: u8 = 22;
const BADGE_WIDTH_SINGLE: u8 = 11;

/// Badge area background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeColor {
    EvGreen,
    StandardBlue,
}

impl BadgeColor {
    pub fn hex(&self) -> &'static str {
        match self {
            Self::EvGreen => "#008C45",
            Self::StandardBlue => "#012169",
        }
    }
}

/// Plate background: white at the front, yellow at the rear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateFace {
    White,
    Yellow,
}

impl PlateFace {
    pub fn for_position(position: PlatePosition) -> Self {
        match position {
            PlatePosition::Front => Self::White,
            PlatePosition::Rear => Self::Yellow,
        }
    }
}

/// Font size class for the registration text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextScale {
    /// Two stacked rows on a near-square plate
    Multiline,
    /// Single row sharing the plate with the badge area
    Compact,
    /// Single row across the full plate
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextLayout {
    Single(String),
    TwoLine(String, String),
}

impl TextLayout {
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Single(line) => vec![line.as_str()],
            Self::TwoLine(top, bottom) => vec![top.as_str(), bottom.as_str()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeArea {
    pub visible: bool,
    pub color: BadgeColor,
    /// Letter code under the flag, present only when a badge is selected
    pub code: Option<&'static str>,
    pub show_flag: bool,
    pub width_percent: u8,
}

impl BadgeArea {
    pub fn derive(badge: PlateBadge, ev_strip: bool, multiline: bool) -> Self {
        let badge_selected = badge != PlateBadge::None;
        Self {
            visible: badge_selected || ev_strip,
            color: if ev_strip {
                BadgeColor::EvGreen
            } else {
                BadgeColor::StandardBlue
            },
            code: badge.code(),
            show_flag: badge_selected,
            width_percent: if multiline {
                BADGE_WIDTH_MULTILINE
            } else {
                BADGE_WIDTH_SINGLE
            },
        }
    }
}

/// Render facts for one plate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateView {
    pub position: PlatePosition,
    pub size: &'static PlateSize,
    pub display_reg: String,
    pub text_layout: TextLayout,
    pub badge_area: BadgeArea,
    /// Coachline colour, `None` when no border is selected
    pub coachline: Option<PlateBorder>,
    pub finish: PlateStyle,
    pub face: PlateFace,
    pub text_scale: TextScale,
    pub aspect_ratio: f64,
    pub legal_marking: &'static str,
}

impl PlateView {
    /// Derive the view of one plate; pure, same inputs give the same view
    pub fn derive(position: PlatePosition, config: &PlateConfig) -> Self {
        let size = resolve_size(position, config.size_id(position));
        let display_reg = display_reg(&config.reg).to_string();
        let text_layout = text_layout(&display_reg, size.multiline);
        let badge_area = BadgeArea::derive(config.badge, config.ev_strip, size.multiline);

        let text_scale = if size.multiline {
            TextScale::Multiline
        } else if badge_area.visible {
            TextScale::Compact
        } else {
            TextScale::Full
        };

        Self {
            position,
            size,
            display_reg,
            text_layout,
            badge_area,
            coachline: (config.border != PlateBorder::None).then_some(config.border),
            finish: config.style,
            face: PlateFace::for_position(position),
            text_scale,
            aspect_ratio: aspect_ratio(size),
            legal_marking: LEGAL_MARKING,
        }
    }
}

/// Views for the included plates, front first
pub fn render_plates(config: &PlateConfig) -> Vec<PlateView> {
    PlatePosition::ALL
        .into_iter()
        .filter(|position| config.is_included(*position))
        .map(|position| PlateView::derive(position, config))
        .collect()
}

pub fn display_reg(reg: &str) -> &str {
    if reg.is_empty() { PLACEHOLDER_REG } else { reg }
}

pub fn text_layout(reg: &str, multiline: bool) -> TextLayout {
    if !multiline {
        return TextLayout::Single(reg.to_string());
    }
    let (top, bottom) = split_two_lines(reg);
    TextLayout::TwoLine(top, bottom)
}

/// Split at the first space (dropping the remaining spaces from the second
/// row), or at the character midpoint rounded up
pub fn split_two_lines(reg: &str) -> (String, String) {
    if let Some((top, rest)) = reg.split_once(' ') {
        let bottom: String = rest.split(' ').collect();
        return (top.to_string(), bottom);
    }
    let chars: Vec<char> = reg.chars().collect();
    let mid = chars.len().div_ceil(2);
    (chars[..mid].iter().collect(), chars[mid..].iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_first_space() {
        assert_eq!(split_two_lines("AB12 CDE"), ("AB12".into(), "CDE".into()));
        assert_eq!(split_two_lines("A B C"), ("A".into(), "BC".into()));
        assert_eq!(split_two_lines(" AB"), ("".into(), "AB".into()));
    }

    #[test]
    fn test_split_at_midpoint_rounded_up() {
        assert_eq!(split_two_lines("AB12CDE"), ("AB12".into(), "CDE".into()));
        assert_eq!(split_two_lines("AB12"), ("AB".into(), "12".into()));
        assert_eq!(split_two_lines("X"), ("X".into(), "".into()));
        assert_eq!(split_two_lines(""), ("".into(), "".into()));
    }

    #[test]
    fn test_placeholder_when_reg_empty() {
        let view = PlateView::derive(PlatePosition::Front, &PlateConfig::default());
        assert_eq!(view.display_reg, PLACEHOLDER_REG);
        assert_eq!(view.text_layout, TextLayout::Single("REG PRES".into()));
    }

    #[test]
    fn test_multiline_placeholder_splits_on_space() {
        let config = PlateConfig::default().with_size(PlatePosition::Front, "square");
        let view = PlateView::derive(PlatePosition::Front, &config);
        assert_eq!(
            view.text_layout,
            TextLayout::TwoLine("REG".into(), "PRES".into())
        );
        assert_eq!(view.text_scale, TextScale::Multiline);
        assert_eq!(view.badge_area.width_percent, 22);
    }

    #[test]
    fn test_badge_area_hidden_by_default() {
        let view = PlateView::derive(PlatePosition::Rear, &PlateConfig::default());
        assert!(!view.badge_area.visible);
        assert_eq!(view.badge_area.color, BadgeColor::StandardBlue);
        assert_eq!(view.badge_area.code, None);
        assert_eq!(view.text_scale, TextScale::Full);
    }

    #[test]
    fn test_badge_with_ev_strip_is_green() {
        let config = PlateConfig::default()
            .with_badge(PlateBadge::Uk)
            .with_ev_strip(true);
        let view = PlateView::derive(PlatePosition::Front, &config);
        assert!(view.badge_area.visible);
        assert_eq!(view.badge_area.color, BadgeColor::EvGreen);
        assert_eq!(view.badge_area.code, Some("UK"));
        assert!(view.badge_area.show_flag);
        assert_eq!(view.text_scale, TextScale::Compact);
    }

    #[test]
    fn test_ev_strip_alone_shows_badge_area() {
        let config = PlateConfig::default().with_ev_strip(true);
        let area = PlateView::derive(PlatePosition::Rear, &config).badge_area;
        assert!(area.visible);
        assert_eq!(area.color, BadgeColor::EvGreen);
        assert_eq!(area.code, None);
        assert!(!area.show_flag);
        assert_eq!(area.width_percent, 11);
    }

    #[test]
    fn test_badge_without_ev_is_blue() {
        let config = PlateConfig::default().with_badge(PlateBadge::Eng);
        let area = PlateView::derive(PlatePosition::Front, &config).badge_area;
        assert!(area.visible);
        assert_eq!(area.color, BadgeColor::StandardBlue);
        assert_eq!(area.code, Some("ENG"));
    }

    #[test]
    fn test_faces_and_coachline() {
        let config = PlateConfig::default()
            .with_border(PlateBorder::Green)
            .with_style(PlateStyle::FourD);
        let views = render_plates(&config);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].face, PlateFace::White);
        assert_eq!(views[1].face, PlateFace::Yellow);
        assert_eq!(views[0].coachline, Some(PlateBorder::Green));
        assert_eq!(views[1].finish, PlateStyle::FourD);

        let plain = PlateView::derive(PlatePosition::Front, &PlateConfig::default());
        assert_eq!(plain.coachline, None);
    }

    #[test]
    fn test_render_only_included_plates() {
        let config = PlateConfig::default().with_included(PlatePosition::Front, false);
        let views = render_plates(&config);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].position, PlatePosition::Rear);

        let none = config.with_included(PlatePosition::Rear, false);
        assert!(render_plates(&none).is_empty());
    }

    #[test]
    fn test_unknown_size_renders_with_fallback() {
        let config = PlateConfig::default().with_size(PlatePosition::Front, "nonexistent-id");
        let view = PlateView::derive(PlatePosition::Front, &config);
        assert_eq!(view.size.id, "standard");
        assert!((view.aspect_ratio - 520.0 / 111.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_view_is_deterministic() {
        let config = PlateConfig::default()
            .with_reg("AB12 CDE")
            .with_size(PlatePosition::Front, "motorbike")
            .with_badge(PlateBadge::Cym);
        assert_eq!(render_plates(&config), render_plates(&config));
    }

    #[test]
    fn test_view_serializes_for_clients() {
        let config = PlateConfig::default()
            .with_reg("X1")
            .with_ev_strip(true);
        let json = serde_json::to_value(PlateView::derive(PlatePosition::Rear, &config)).unwrap();
        assert_eq!(json["displayReg"], "X1");
        assert_eq!(json["badgeArea"]["color"], "ev-green");
        assert_eq!(json["face"], "yellow");
        assert_eq!(json["textLayout"]["single"], "X1");
        assert_eq!(json["size"]["id"], "standard");
        assert_eq!(json["legalMarking"], LEGAL_MARKING);
    }
}
