//! # Sancho Core
//!
//! Domain layer for the Sancho backend.
//! This crate contains the role hierarchy, token and session entities,
//! repository interfaces, the authentication services and the shared
//! business meta cache.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Account, BusinessMeta, Claims, Role, Session, TokenPair, UserIdentity};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{OrderCodeLookup, SessionRepository, UserRepository};
pub use services::{
    AuthService, AuthServiceConfig, MetaCache, OrderCodeGenerator, PasswordHasher,
    SessionRefresher, TokenService, TokenServiceConfig,
};
