//! Data models
//!
//! Shared between the plate engine, the storefront server and any frontend
//! (via API). Wire names follow the storefront's JSON (camelCase fields,
//! lowercase option values).

pub mod cart;
pub mod order;
pub mod plate;

// Re-exports
pub use cart::*;
pub use order::*;
pub use plate::*;
