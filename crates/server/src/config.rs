//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADMIN_EMAIL` - Operator login email
//! - `ADMIN_PASSWORD` - Operator login password (min 12 chars)
//!
//! ## Optional
//! - `BANK_HOST` - Bind address (default: 127.0.0.1)
//! - `BANK_PORT` - Listen port (default: 3000)
//! - `BANK_DATA_DIR` - Directory for the JSON collection files (default: data)
//! - `BANK_PUBLIC_DIR` - Directory served as static assets (default: public)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use ledgerline_core::{Email, EmailError};

const MIN_ADMIN_PASSWORD_LENGTH: usize = 12;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid ADMIN_EMAIL: {0}")]
    InvalidAdminEmail(#[from] EmailError),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the JSON collection files
    pub data_dir: PathBuf,
    /// Directory served as static assets (router fallback)
    pub public_dir: PathBuf,
    /// Operator login email
    pub admin_email: Email,
    /// Operator login password
    pub admin_password: SecretString,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the admin password fails the length check.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("BANK_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BANK_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("BANK_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("BANK_PORT".to_owned(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("BANK_DATA_DIR", "data"));
        let public_dir = PathBuf::from(get_env_or_default("BANK_PUBLIC_DIR", "public"));

        let admin_email = Email::parse(&get_required_env("ADMIN_EMAIL")?)?;
        let admin_password = SecretString::from(get_required_env("ADMIN_PASSWORD")?);
        validate_admin_password(&admin_password)?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            data_dir,
            public_dir,
            admin_email,
            admin_password,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Check supplied operator credentials by plain equality.
    ///
    /// Real authentication is out of scope for this demo; there is no
    /// hashing and no session, just a comparison against the configured
    /// values.
    #[must_use]
    pub fn admin_credentials_match(&self, email: &str, password: &str) -> bool {
        self.admin_email.as_str() == email && self.admin_password.expose_secret() == password
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Validate that the admin password meets the minimum length requirement.
fn validate_admin_password(password: &SecretString) -> Result<(), ConfigError> {
    let value = password.expose_secret();
    if value.len() < MIN_ADMIN_PASSWORD_LENGTH {
        return Err(ConfigError::InsecureSecret(
            "ADMIN_PASSWORD".to_owned(),
            format!(
                "must be at least {} characters (got {})",
                MIN_ADMIN_PASSWORD_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}
