//! Error type and the JSON body sent for it

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error type crossing crate boundaries: the engine's plate and
/// cart errors convert into it, and the server answers with it directly.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    /// Field-level errors or context, keyed by wire name
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = Vec::new();
        collect_invalid_fields(&errors, &mut fields);
        fields.sort();

        let mut err = AppError::validation("Missing required fields");
        for field in fields {
            err = err.with_detail(field, "invalid");
        }
        err
    }
}

/// Wire names of every failed rule; nested structs are flattened on the
/// wire, so their fields are reported without a prefix
fn collect_invalid_fields(errors: &validator::ValidationErrors, out: &mut Vec<String>) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(_) => out.push(camel_case(field)),
            ValidationErrorsKind::Struct(inner) => collect_invalid_fields(inner, out),
            ValidationErrorsKind::List(list) => {
                for inner in list.values() {
                    collect_invalid_fields(inner, out);
                }
            }
        }
    }
}

/// `customer_email` -> `customerEmail`
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// JSON body of every failed request
///
/// - `code`: numeric [`ErrorCode`]
/// - `message`: human-readable message
/// - `details`: field-level errors, when there are any
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        if status.is_server_error() {
            tracing::error!(
                code = %self.code,
                category = self.code.category().name(),
                message = %self.message,
                "Request failed"
            );
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
