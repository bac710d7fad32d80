//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing, per-role TTLs, session cookie, password hashing
//! - `business` - Initial business meta published at boot
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//!
//! Loading is layered: struct defaults, then an optional TOML file, then
//! `SANCHO__`-prefixed environment variables (`SANCHO__AUTH__JWT__SECRET`).

pub mod auth;
pub mod business;
pub mod database;
pub mod environment;
pub mod server;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{
    AuthConfig, JwtConfig, PasswordHashing, RoleTtlConfig, SessionCookieConfig, TtlConfig,
    MAX_TTL_SECS,
};
pub use business::BusinessConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "SANCHO_CONFIG";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "SANCHO";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file does not exist: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Initial business meta
    pub business: BusinessConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the current process.
    ///
    /// `.env` is read first, then the file named by `SANCHO_CONFIG` (which
    /// must exist when set) or `config/<environment>.toml` (optional), then
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load_from(Some(Path::new(&path))),
            Err(_) => {
                let environment = Environment::from_env();
                let default_path = PathBuf::from("config").join(environment.config_file());
                if default_path.exists() {
                    Self::load_from(Some(&default_path))
                } else {
                    Self::load_from(None)
                }
            }
        }
    }

    /// Load configuration from an optional file plus environment overrides
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            builder = builder.add_source(config::File::from(path));
        }

        let loaded: AppConfig = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject configurations the server must not start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt.secret.is_empty() {
            return Err(ConfigError::Invalid("auth.jwt.secret must not be empty".into()));
        }
        if self.auth.jwt.issuer.is_empty() {
            return Err(ConfigError::Invalid("auth.jwt.issuer must not be empty".into()));
        }
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::Invalid(
                "auth.jwt.secret must be set explicitly in production".into(),
            ));
        }
        if !(1..=MAX_TTL_SECS).contains(&self.auth.jwt.access_token_expiry) {
            return Err(ConfigError::Invalid(format!(
                "auth.jwt.access_token_expiry must be between 1 and {} seconds",
                MAX_TTL_SECS
            )));
        }
        let ttls = [("access", &self.auth.ttl.access), ("refresh", &self.auth.ttl.refresh)];
        for (kind, ttl) in ttls {
            if let Some((role, secs)) = ttl.out_of_range() {
                return Err(ConfigError::Invalid(format!(
                    "auth.ttl.{}.{} is {}, must be between 1 and {} seconds",
                    kind, role, secs, MAX_TTL_SECS
                )));
            }
        }
        if self.auth.persistence_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "auth.persistence_timeout_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
