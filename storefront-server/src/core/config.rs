use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | . | base directory for relative paths |
/// | HTTP_PORT | 3000 | HTTP port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | default filter when `RUST_LOG` is unset |
/// | LOG_DIR | (unset) | daily rolling log files go here when set |
/// | LOG_JSON | false | JSON log lines |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
/// | PRICE_TABLE_FILE | (unset) | JSON price table overriding the defaults |
///
/// ```ignore
/// HTTP_PORT=8080 PRICE_TABLE_FILE=prices.json cargo run -p storefront-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
    pub request_timeout_ms: u64,
    pub price_table_file: Option<String>,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| ".".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            price_table_file: std::env::var("PRICE_TABLE_FILE")
                .ok()
                .filter(|f| !f.is_empty()),
        }
    }

    /// Environment config with the work dir and port replaced
    ///
    /// Mostly for tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Price table path, resolved against `work_dir` when relative
    pub fn price_table_path(&self) -> Option<PathBuf> {
        self.price_table_file.as_ref().map(|file| {
            let path = PathBuf::from(file);
            if path.is_absolute() {
                path
            } else {
                PathBuf::from(&self.work_dir).join(path)
            }
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
