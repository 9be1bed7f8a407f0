use thiserror::Error;

/// Errors that stop the server from starting or serving
///
/// Request-level failures use [`shared::error::AppError`] instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid price table {path}: {source}")]
    PriceTable {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
