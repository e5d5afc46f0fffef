//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOCKROOM_DATABASE_URL` - `PostgreSQL` connection string (falls back
//!   to `DATABASE_URL`)
//!
//! ## Optional
//! - `STOCKROOM_HOST` - Bind address (default: 127.0.0.1)
//! - `STOCKROOM_PORT` - Listen port (default: 8000)
//! - `JWT_SECRET` - Token signing secret. May be absent at startup; token
//!   issuance fails until it is configured.
//! - `JWT_EXPIRES_IN` - Token lifetime in the form `"<hours>h"` (default: 24h)

use std::net::{IpAddr, SocketAddr};

use chrono::Duration;
use secrecy::SecretString;
use thiserror::Error;

/// Default token lifetime in hours, also the fallback for unparsable
/// `JWT_EXPIRES_IN` values.
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Token issuance configuration
    pub auth: AuthConfig,
}

/// Token issuance configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token signing secret. Absent until deployed configuration provides
    /// it; issuing a token without it is a fatal configuration error.
    pub jwt_secret: Option<SecretString>,
    /// How long issued tokens stay valid.
    pub token_ttl: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("STOCKROOM_DATABASE_URL")?;
        let host = get_env_or_default("STOCKROOM_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOCKROOM_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("STOCKROOM_PORT", "8000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOCKROOM_PORT".to_owned(), e.to_string()))?;

        Ok(Self {
            database_url,
            host,
            port,
            auth: AuthConfig::from_env(),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AuthConfig {
    fn from_env() -> Self {
        Self {
            jwt_secret: get_optional_env("JWT_SECRET").map(SecretString::from),
            token_ttl: parse_token_ttl(get_optional_env("JWT_EXPIRES_IN").as_deref()),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a token lifetime in the form `"<hours>h"`.
///
/// Unset or unparsable values fall back to 24 hours rather than failing:
/// a misconfigured lifetime is not worth refusing logins over, unlike a
/// missing secret.
fn parse_token_ttl(value: Option<&str>) -> Duration {
    value
        .and_then(|s| s.strip_suffix('h'))
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|h| *h >= 0)
        .and_then(Duration::try_hours)
        .unwrap_or_else(|| Duration::hours(DEFAULT_TOKEN_TTL_HOURS))
}
