//! Registration normalization and validation
//!
//! Normalization runs on every keystroke and only ever removes characters;
//! spaces survive exactly as typed. Validation looks at the
//! whitespace-stripped form.

use crate::error::PlateError;

/// Maximum registration length, excluding spaces
pub const MAX_REG_LEN: usize = 8;

/// Uppercase the input and drop everything except A-Z, 0-9 and spaces
pub fn normalize(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == ' ')
        .collect()
}

/// Uppercased registration with all whitespace removed
pub fn stripped(reg: &str) -> String {
    reg.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Per-keystroke validity check
///
/// An empty registration is a valid interim state; submission applies its
/// own "required" rule on top of this.
pub fn validate(reg: &str) -> Result<(), PlateError> {
    let clean = stripped(reg);
    if clean.is_empty() {
        return Ok(());
    }
    if clean.chars().count() > MAX_REG_LEN {
        return Err(PlateError::TooLong);
    }
    if !clean.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
        return Err(PlateError::InvalidCharacters);
    }
    Ok(())
}
