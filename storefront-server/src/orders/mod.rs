//! Order book
//!
//! - [`service`] - turning a checkout request into an order
//! - [`repository`] - concurrent in-memory storage and status updates
//! - [`stats`] - admin dashboard aggregation

pub mod repository;
pub mod service;
pub mod stats;

pub use repository::OrderRepository;
pub use service::prepare_order;
pub use stats::compute_stats;
