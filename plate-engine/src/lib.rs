//! Plate configuration and pricing engine
//!
//! Everything the plate builder needs, kept synchronous and free of I/O
//! except for cart persistence:
//!
//! - [`registration`] - normalize and validate registration text
//! - [`sizes`] - resolve size ids against the front/rear catalogs
//! - [`pricing`] - price table and total calculation
//! - [`builder`] - the editable config, inline error and submission
//! - [`render`] - what every preview, invoice and admin view derives
//! - [`cart`] - client-side cart collaborator with persistence
//! - [`checkout`] - flattening the cart into an order
//!
//! # Example
//!
//! ```
//! use plate_engine::{PlateBuilder, PlateUpdate};
//! use shared::models::{FixingKit, PlateStyle};
//!
//! let mut builder = PlateBuilder::new();
//! builder.input_reg("ab12cde");
//! builder.apply(PlateUpdate::Style(PlateStyle::ThreeD));
//! builder.apply(PlateUpdate::FixingKit(FixingKit::Sticky));
//!
//! let mut cart: Vec<shared::models::CartItem> = Vec::new();
//! let item = builder.submit(&mut cart).unwrap();
//! assert_eq!(item.reg, "AB12CDE");
//! assert_eq!(item.price, 65.0);
//! ```

pub mod builder;
pub mod cart;
pub mod checkout;
pub mod error;
pub mod pricing;
pub mod registration;
pub mod render;
pub mod sizes;

pub use builder::{PlateBuilder, PlateUpdate, submit, submit_with};
pub use cart::{Cart, CartSink, CartStorage, FileStorage, MemoryStorage};
pub use checkout::{OrderGateway, place_order};
pub use error::{CartStorageError, PlateError};
pub use pricing::{PriceBreakdown, PriceTable, calculate_total};
pub use render::{PlateView, render_plates};
pub use sizes::resolve_size;
