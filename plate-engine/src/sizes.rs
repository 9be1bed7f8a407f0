//! Size resolution

use shared::catalog::sizes_for;
use shared::models::{PlatePosition, PlateSize};

/// Look up a size id in the catalog for `position`
///
/// Unknown ids resolve to the first (standard) entry of that position's list.
pub fn resolve_size(position: PlatePosition, size_id: &str) -> &'static PlateSize {
    let sizes = sizes_for(position);
    match sizes.iter().find(|s| s.id == size_id) {
        Some(size) => size,
        None => {
            let fallback = &sizes[0];
            tracing::warn!(
                position = position.as_str(),
                size_id,
                fallback = %fallback.id,
                "Unknown plate size, using fallback"
            );
            fallback
        }
    }
}

/// Width-to-height ratio used to shape the preview
pub fn aspect_ratio(size: &PlateSize) -> f64 {
    f64::from(size.width) / f64::from(size.height)
}
