//! Shared utilities and common types for the Sancho server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types and layered loading
//! - Error response structures

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, BusinessConfig, ConfigError, DatabaseConfig, Environment, JwtConfig,
    LoggingConfig, PasswordHashing, RoleTtlConfig, ServerConfig, SessionCookieConfig, TtlConfig,
};
pub use errors::{error_codes, ErrorResponse};
