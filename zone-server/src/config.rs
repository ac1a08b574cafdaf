//! Zone server configuration

use std::time::Duration;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Zone server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database path
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// HS256 secret for bearer tokens
    pub jwt_secret: String,
    /// Lifetime of issued tokens
    pub jwt_expiry_hours: i64,
    /// Per-request deadline, covers every store call of the request
    pub request_timeout: Duration,
    /// Default log level (overridden by RUST_LOG)
    pub log_level: String,
    /// JSON console/file logs
    pub log_json: bool,
    /// Directory for rotating log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "zone-server.db".into()),
            http_port: parse_env("HTTP_PORT", 8080),
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            jwt_expiry_hours: parse_env("JWT_EXPIRY_HOURS", 24),
            request_timeout: Duration::from_millis(parse_env("REQUEST_TIMEOUT_MS", 30_000)),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(environment != "development"),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
