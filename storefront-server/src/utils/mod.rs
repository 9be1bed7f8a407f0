//! Utilities
//!
//! - [`AppError`] / [`ErrorBody`] - unified error types (from `shared::error`)
//! - [`logger`] - tracing subscriber setup

pub mod logger;

pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
