use crate::auth::JwtConfig;
use std::time::Duration;

/// Server configuration
///
/// # Environment variables
///
/// Every value can be overridden from the environment (or a `.env` file):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STORE_URL | rocksdb://data/restaurant | SurrealDB connection string |
/// | STORE_NAMESPACE | restaurant | SurrealDB namespace |
/// | DB_NAME | restaurant | database name |
/// | PORT | 8080 | HTTP port |
/// | SECRET_KEY | development fallback | token signing secret |
/// | STORE_TIMEOUT_SECS | 100 | per store-operation timeout |
/// | LOG_LEVEL | info | tracing filter |
/// | LOG_DIR | unset | daily rolling log files when set |
/// | ENVIRONMENT | development | development or production |
///
/// # Example
///
/// ```ignore
/// STORE_URL=mem:// PORT=9000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub store_url: String,
    pub store_namespace: String,
    pub database: String,
    pub http_port: u16,
    pub jwt: JwtConfig,
    pub store_timeout: Duration,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | production
    pub environment: String,
}

impl Config {
    /// Load the configuration, falling back to defaults for unset variables
    pub fn from_env() -> Self {
        Self {
            store_url: std::env::var("STORE_URL")
                .unwrap_or_else(|_| "rocksdb://data/restaurant".into()),
            store_namespace: std::env::var("STORE_NAMESPACE")
                .unwrap_or_else(|_| "restaurant".into()),
            database: std::env::var("DB_NAME").unwrap_or_else(|_| "restaurant".into()),
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt: JwtConfig::from_env(),
            store_timeout: Duration::from_secs(
                std::env::var("STORE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(100),
            ),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// In-memory store with a fixed secret, used by tests
    pub fn in_memory(secret: impl Into<String>) -> Self {
        Self {
            store_url: "mem://".into(),
            store_namespace: "restaurant".into(),
            database: "test".into(),
            http_port: 0,
            jwt: JwtConfig::with_secret(secret),
            store_timeout: Duration::from_secs(100),
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
