//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading with validation: required variables must be present and
//! valid, or the application exits with a clear error message.

use std::env;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable has an invalid value.
    #[error("Invalid value for {var}: {message}")]
    InvalidVar {
        var: &'static str,
        message: String,
    },

    /// The JWT public key file could not be read.
    #[error("Failed to read JWT public key from {path}: {source}")]
    KeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host, `HOST` (default `0.0.0.0`).
    pub host: String,

    /// Bind port, `PORT` (default `8080`).
    pub port: u16,

    /// PostgreSQL connection string, `DATABASE_URL` (required).
    pub database_url: String,

    /// PEM-encoded RSA public key for bearer token validation, read from the
    /// file named by `JWT_PUBLIC_KEY_PATH` (required).
    pub jwt_public_key: Vec<u8>,

    /// Log filter directive, `RUST_LOG` (default `info`).
    pub rust_log: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                var: "PORT",
                message: e.to_string(),
            })?,
            Err(_) => 8080,
        };

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let key_path = env::var("JWT_PUBLIC_KEY_PATH")
            .map_err(|_| ConfigError::MissingVar("JWT_PUBLIC_KEY_PATH"))?;
        let jwt_public_key = std::fs::read(&key_path).map_err(|source| ConfigError::KeyFile {
            path: key_path,
            source,
        })?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            host,
            port,
            database_url,
            jwt_public_key,
            rust_log,
        })
    }

    /// The socket address string to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9000,
            database_url: "postgres://localhost/test".to_string(),
            jwt_public_key: Vec::new(),
            rust_log: "info".to_string(),
        };

        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingVar("DATABASE_URL");
        assert!(err.to_string().contains("DATABASE_URL"));
    }
}
