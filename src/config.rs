//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export APP_ENV="local"
//! export STORAGE_PATH="./storage/storage.db"
//! export LISTEN="0.0.0.0:8080"
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="secret"
//! ```
//!
//! ## Required Variables
//!
//! - `HTTP_USER` / `HTTP_PASSWORD` - Basic auth credentials for `/url` routes
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `local`); selects log
//!   format and default level
//! - `STORAGE_PATH` - SQLite database file, or `:memory:` (default: `./storage/storage.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `HTTP_TIMEOUT` - Per-request timeout in seconds (default: 4)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `RUST_LOG` - Log filter (default: derived from `APP_ENV`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const ENV_LOCAL: &str = "local";
pub const ENV_DEV: &str = "dev";
pub const ENV_PROD: &str = "prod";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment: `local`, `dev` or `prod`.
    pub app_env: String,
    pub storage_path: String,
    pub listen_addr: String,
    /// Per-request timeout in seconds (`HTTP_TIMEOUT`).
    pub http_timeout: u64,
    pub http_user: String,
    pub http_password: String,
    /// Explicit `RUST_LOG` filter, if set.
    pub log_filter: Option<String>,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the Basic auth credentials are missing.
    pub fn from_env() -> Result<Self> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| ENV_LOCAL.to_string());
        let storage_path =
            env::var("STORAGE_PATH").unwrap_or_else(|_| "./storage/storage.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let http_timeout = env::var("HTTP_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4);

        let http_user = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let http_password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;

        let log_filter = env::var("RUST_LOG").ok().filter(|v| !v.is_empty());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            app_env,
            storage_path,
            listen_addr,
            http_timeout,
            http_user,
            http_password,
            log_filter,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `app_env` is not `local`, `dev` or `prod`
    /// - `storage_path` or the credentials are empty
    /// - `listen_addr` is invalid
    /// - `http_timeout` or `db_max_connections` is zero
    pub fn validate(&self) -> Result<()> {
        if ![ENV_LOCAL, ENV_DEV, ENV_PROD].contains(&self.app_env.as_str()) {
            anyhow::bail!(
                "APP_ENV must be 'local', 'dev' or 'prod', got '{}'",
                self.app_env
            );
        }

        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.http_timeout == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.http_user.is_empty() || self.http_password.is_empty() {
            anyhow::bail!("HTTP_USER and HTTP_PASSWORD must not be empty");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Returns true if logs should be emitted as JSON.
    pub fn json_logs(&self) -> bool {
        self.app_env != ENV_LOCAL
    }

    /// Returns the log filter: `RUST_LOG` if set, otherwise the environment default.
    pub fn log_filter(&self) -> &str {
        match &self.log_filter {
            Some(filter) => filter.as_str(),
            None if self.app_env == ENV_PROD => "info",
            None => "debug",
        }
    }

    /// Returns the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.app_env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Request timeout: {}s", self.http_timeout);
        tracing::info!("  Basic auth user: {}", self.http_user);
        tracing::info!("  Log filter: {}", self.log_filter());
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
