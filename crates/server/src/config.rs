//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 3000)
//! - `ADMIN_TOKEN` - Token expected in the `x-admin-token` header (default:
//!   a weak placeholder; must be overridden in any real deployment)
//! - `ALLOWED_ORIGINS` - Comma-separated CORS allow-list (empty = allow all)
//! - `DB_PATH` - Path of the JSON document store (default: data/db.json)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Placeholder admin token compiled in as the default.
///
/// Kept deliberately recognizable so a deployment that forgot to set
/// `ADMIN_TOKEN` is loud about it in the logs.
const DEFAULT_ADMIN_TOKEN: &str = "change-me-very-strong";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Admin token compared against the `x-admin-token` header
    pub admin_token: SecretString,
    /// CORS origin allow-list; empty means any origin is allowed
    pub allowed_origins: Vec<String>,
    /// Path of the persisted JSON document
    pub db_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `HOST` or `PORT` fail to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;

        let admin_token = SecretString::from(get_env_or_default("ADMIN_TOKEN", DEFAULT_ADMIN_TOKEN));
        if admin_token.expose_secret() == DEFAULT_ADMIN_TOKEN {
            tracing::warn!("ADMIN_TOKEN is unset; admin endpoints use the placeholder token");
        }

        let allowed_origins = parse_origins(&get_env_or_default("ALLOWED_ORIGINS", ""));
        let db_path = PathBuf::from(get_env_or_default("DB_PATH", "data/db.json"));

        Ok(Self {
            host,
            port,
            admin_token,
            allowed_origins,
            db_path,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Split a comma-separated origin list, trimming whitespace and dropping
/// empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
