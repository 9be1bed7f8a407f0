//! Storefront server
//!
//! HTTP front for the plate engine and the order book.
//!
//! # Module layout
//!
//! ```text
//! storefront-server/src/
//! ├── core/      # config, state, startup errors, server
//! ├── api/       # HTTP routes and handlers
//! ├── orders/    # order repository, creation rules, admin stats
//! └── utils/     # logging, re-exported error types
//! ```

pub mod api;
pub mod core;
pub mod orders;
pub mod utils;

pub use crate::core::{Config, Server, ServerError, ServerState, build_app};
pub use crate::orders::OrderRepository;
pub use crate::utils::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
pub use crate::utils::logger::init_logger_with_file;

/// Load `.env`, read the configuration and install the global logger
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
   ___  _       _
  / _ \| | __ _| |_ ___  ___
 / /_)/| |/ _` | __/ _ \/ __|
/ ___/ | | (_| | ||  __/\__ \
\/     |_|\__,_|\__\___||___/
    "#
    );
}
