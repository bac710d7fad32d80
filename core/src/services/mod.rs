//! Business services containing domain logic and use cases.

pub mod auth;
pub mod meta_cache;
pub mod order_code;
pub mod pricing;
pub mod token;

// Re-export commonly used types
pub use auth::{
    hasher_for, AuthService, AuthServiceConfig, BcryptPasswordHasher, PasswordHasher, RoleTtl,
    SessionRefresher, Sha1PasswordHasher,
};
pub use meta_cache::MetaCache;
pub use order_code::OrderCodeGenerator;
pub use pricing::apply_delivery_punishment;
pub use token::{TokenService, TokenServiceConfig};
