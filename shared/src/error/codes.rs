//! Unified error codes for the storefront
//!
//! Error codes are shared by the plate engine, the storefront server and
//! any frontend reading API responses. They are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Plate configuration errors
//! - 7xxx: Cart errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Request body failed field validation
    ValidationFailed = 2,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no items
    OrderEmpty = 4002,
    /// Order total is missing or not positive
    OrderInvalidTotal = 4003,
    /// Requested status change is not part of the order lifecycle
    OrderInvalidStatusTransition = 4004,

    // ==================== 6xxx: Plate ====================
    /// Registration is empty at submission time
    RegistrationRequired = 6001,
    /// Registration exceeds the maximum length
    RegistrationTooLong = 6002,
    /// Registration contains characters outside A-Z and 0-9
    RegistrationInvalidCharacters = 6003,
    /// Neither the front nor the rear plate is selected
    NoPlateSelected = 6004,

    // ==================== 7xxx: Cart ====================
    /// Cart could not be read from or written to storage
    CartStorageFailed = 7002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order is empty",
            ErrorCode::OrderInvalidTotal => "Order total must be greater than zero",
            ErrorCode::OrderInvalidStatusTransition => "Order status change is not allowed",

            // Plate
            ErrorCode::RegistrationRequired => "Registration is required",
            ErrorCode::RegistrationTooLong => "Registration too long",
            ErrorCode::RegistrationInvalidCharacters => "Invalid characters",
            ErrorCode::NoPlateSelected => "Please select at least one plate",

            // Cart
            ErrorCode::CartStorageFailed => "Cart storage failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderEmpty),
            4003 => Ok(ErrorCode::OrderInvalidTotal),
            4004 => Ok(ErrorCode::OrderInvalidStatusTransition),

            // Plate
            6001 => Ok(ErrorCode::RegistrationRequired),
            6002 => Ok(ErrorCode::RegistrationTooLong),
            6003 => Ok(ErrorCode::RegistrationInvalidCharacters),
            6004 => Ok(ErrorCode::NoPlateSelected),

            // Cart
            7002 => Ok(ErrorCode::CartStorageFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
