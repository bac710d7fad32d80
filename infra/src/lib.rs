//! # Infrastructure Layer
//!
//! Concrete implementations of the repository traits defined in
//! `sancho_core`:
//!
//! - **Database**: MySQL implementations using SQLx
//! - **Memory**: in-process stores for development and tests
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// In-process repository implementations
pub mod memory;

pub use memory::{InMemorySessionRepository, InMemoryUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[cfg(feature = "mysql")]
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
