//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::OrderNotFound => StatusCode::NOT_FOUND,

            Self::OrderInvalidStatusTransition => StatusCode::CONFLICT,

            // Well-formed plate config that cannot be submitted
            Self::RegistrationRequired
            | Self::RegistrationTooLong
            | Self::RegistrationInvalidCharacters
            | Self::NoPlateSelected => StatusCode::UNPROCESSABLE_ENTITY,

            Self::CartStorageFailed => StatusCode::INTERNAL_SERVER_ERROR,

            Self::ValidationFailed | Self::OrderEmpty | Self::OrderInvalidTotal => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}
