//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management
//! - Embedded schema migrations
//! - Repository implementations for accounts and sessions

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::{create_pool, run_migrations, DatabasePool};
pub use mysql::{MySqlSessionRepository, MySqlUserRepository};
