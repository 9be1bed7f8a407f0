//! Shared types for the plate storefront
//!
//! Data contracts exchanged between the plate engine, the cart, the order
//! service and every preview/invoice consumer: plate models, the size
//! catalog, cart and order items, and the unified error system.

pub mod catalog;
pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
