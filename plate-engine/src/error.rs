//! Engine error types

use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Inline errors raised by the plate builder
///
/// These are values shown next to the input, never fatal. The messages are
/// the ones displayed to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
pub enum PlateError {
    #[error("Registration too long")]
    TooLong,

    #[error("Invalid characters")]
    InvalidCharacters,

    #[error("Registration is required")]
    RegistrationRequired,

    #[error("Please select at least one plate")]
    NoPlateSelected,
}

impl PlateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::TooLong => ErrorCode::RegistrationTooLong,
            Self::InvalidCharacters => ErrorCode::RegistrationInvalidCharacters,
            Self::RegistrationRequired => ErrorCode::RegistrationRequired,
            Self::NoPlateSelected => ErrorCode::NoPlateSelected,
        }
    }
}

impl From<PlateError> for AppError {
    fn from(err: PlateError) -> Self {
        AppError::with_message(err.code(), err.to_string())
    }
}

/// Cart persistence failures
#[derive(Debug, Error)]
pub enum CartStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<CartStorageError> for AppError {
    fn from(err: CartStorageError) -> Self {
        AppError::with_message(ErrorCode::CartStorageFailed, err.to_string())
    }
}
