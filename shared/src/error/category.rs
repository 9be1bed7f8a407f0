//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 4xxx: Order errors
/// - 6xxx: Plate configuration errors
/// - 7xxx: Cart errors
/// - anything else: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Order errors (4xxx)
    Order,
    /// Plate configuration errors (6xxx)
    Plate,
    /// Cart errors (7xxx)
    Cart,
    /// Anything outside the assigned ranges
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            4000..5000 => Self::Order,
            6000..7000 => Self::Plate,
            7000..8000 => Self::Cart,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Order => "order",
            Self::Plate => "plate",
            Self::Cart => "cart",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Order);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Plate);
        assert_eq!(ErrorCategory::from_code(7002), ErrorCategory::Cart);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::OrderEmpty.category(), ErrorCategory::Order);
        assert_eq!(
            ErrorCode::RegistrationTooLong.category(),
            ErrorCategory::Plate
        );
        assert_eq!(
            ErrorCode::CartStorageFailed.category(),
            ErrorCategory::Cart
        );
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Plate).unwrap();
        assert_eq!(json, "\"plate\"");

        let category: ErrorCategory = serde_json::from_str("\"cart\"").unwrap();
        assert_eq!(category, ErrorCategory::Cart);
        assert_eq!(category.name(), "cart");
    }
}
