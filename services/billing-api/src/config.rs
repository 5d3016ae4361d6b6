//! Configuration for the Billing API service.

use rehearsal_db::PoolOptions;
use std::time::Duration;

/// Billing API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,
    /// Database URL
    pub database_url: String,
    /// Connection pool tuning
    pub pool: PoolOptions,
    /// Apply bundled migrations at startup
    pub run_migrations: bool,
    /// Identity token verification
    pub auth: AuthConfig,
    /// Request timeout
    pub request_timeout: Duration,
    /// Metrics enabled
    pub metrics_enabled: bool,
}

/// Identity token verification settings
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret shared with the identity provider
    pub jwt_secret: String,
    /// Expected token issuer, if any
    pub jwt_issuer: Option<String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[redacted]")
            .field("jwt_issuer", &self.jwt_issuer)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Database
        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = parse_or(&var, "DB_MAX_CONNECTIONS", 10)?;
        let acquire_timeout_secs: u64 = parse_or(&var, "DB_ACQUIRE_TIMEOUT_SECS", 5)?;
        let run_migrations = parse_or(&var, "RUN_MIGRATIONS", false)?;

        // Server port
        let http_port = parse_or(&var, "HTTP_PORT", 8081)?;

        // Identity provider
        let jwt_secret = var("AUTH_JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("AUTH_JWT_SECRET"))?;
        let jwt_issuer = var("AUTH_JWT_ISSUER").filter(|s| !s.is_empty());

        // Request timeout
        let request_timeout_secs: u64 = parse_or(&var, "REQUEST_TIMEOUT_SECS", 30)?;

        // Metrics
        let metrics_enabled = parse_or(&var, "METRICS_ENABLED", true)?;

        Ok(Self {
            http_port,
            database_url,
            pool: PoolOptions {
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
            run_migrations,
            auth: AuthConfig {
                jwt_secret,
                jwt_issuer,
            },
            request_timeout: Duration::from_secs(request_timeout_secs),
            metrics_enabled,
        })
    }
}

fn parse_or<F, T>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match var(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
