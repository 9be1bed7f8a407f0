//! Plate size catalog
//!
//! Read-only presets for front and rear mounting positions. The two lists are
//! separate namespaces: `"standard"` exists in both, everything else belongs
//! to exactly one position. The first entry of each list is the fallback for
//! unknown ids.

use std::sync::LazyLock;

use crate::models::{PlatePosition, PlateSize};

fn size(id: &str, label: &str, width: u32, height: u32, multiline: bool) -> PlateSize {
    PlateSize {
        id: id.to_string(),
        label: label.to_string(),
        width,
        height,
        multiline,
    }
}

pub static FRONT_SIZES: LazyLock<Vec<PlateSize>> = LazyLock::new(|| {
    vec![
        size("standard", "Standard Car (520mm x 111mm)", 520, 111, false),
        size("square", "Standard Square (279mm x 203mm)", 279, 203, true),
        size("motorbike", "Standard Motorbike (229mm x 178mm)", 229, 178, true),
    ]
});

pub static REAR_SIZES: LazyLock<Vec<PlateSize>> = LazyLock::new(|| {
    vec![
        size("standard", "Standard Car (520mm x 111mm)", 520, 111, false),
        size("rr_sport_v1", "Range Rover Sport v1 (615mm x 150mm)", 615, 150, false),
        size("rr_sport_v2", "Range Rover Sport v2 (560mm x 165mm)", 560, 165, false),
        size("jag_x_type", "Jaguar X-Type Saloon (560mm x 162mm)", 560, 162, false),
        size("jag_s_type_v1", "Jaguar S-Type v1 (585mm x 175mm)", 585, 175, false),
        size("jag_s_type_v2", "Jaguar S-Type v2 (565mm x 165mm)", 565, 165, false),
        size("jag_xk8", "Jaguar XK8/DB9 (552mm x 171mm)", 552, 171, false),
        size("jag_xj_v1", "Jaguar XJ v1 (610mm x 150mm)", 610, 150, false),
        size("jag_xj_v2", "Jaguar XJ v2 (530mm x 150mm)", 530, 150, false),
        size("over_v2", "Oversized Oblong v2 (533mm x 152mm)", 533, 152, false),
        size("over_v3", "Oversized Oblong v3 (520mm x 152mm)", 520, 152, false),
        size("over_v4", "Oversized Oblong v4 (520mm x 165mm)", 520, 165, false),
        size("over_v5", "Oversized Oblong v5 (559mm x 152mm)", 559, 152, false),
    ]
});

/// Size list for a mounting position
pub fn sizes_for(position: PlatePosition) -> &'static [PlateSize] {
    match position {
        PlatePosition::Front => &FRONT_SIZES,
        PlatePosition::Rear => &REAR_SIZES,
    }
}
