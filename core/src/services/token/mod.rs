//! Token service module
//!
//! This module handles signed access token issuance and validation plus
//! opaque refresh token generation.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
