//! Authentication service module
//!
//! This module provides:
//! - Staff registration and login (admins and workers)
//! - Customer registration by phone number
//! - Session refresh with conditional rotation
//! - Logout
//! - Password hashing schemes

mod config;
mod password;
mod refresher;
mod service;

#[cfg(test)]
mod tests;

pub use config::{AuthServiceConfig, RoleTtl};
pub use password::{hasher_for, BcryptPasswordHasher, PasswordHasher, Sha1PasswordHasher};
pub use refresher::SessionRefresher;
pub use service::AuthService;
