//! Password hashing schemes

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use sancho_shared::PasswordHashing;
use sha1::{Digest, Sha1};

use crate::errors::{DomainError, DomainResult};

/// Hashes and verifies stored passwords
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> DomainResult<String>;

    /// Compare `password` against a stored hash
    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool>;
}

/// Salted bcrypt hashing
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
            message: format!("Failed to verify password: {}", e),
        })
    }
}

/// Unsalted hex SHA-1, for accounts created by earlier deployments
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1PasswordHasher;

impl PasswordHasher for Sha1PasswordHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        Ok(hex::encode(Sha1::digest(password.as_bytes())))
    }

    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let computed = self.hash(password)?;
        Ok(constant_time_eq(computed.as_bytes(), hash.as_bytes()))
    }
}

/// Build the configured hasher
pub fn hasher_for(scheme: PasswordHashing, bcrypt_cost: u32) -> Arc<dyn PasswordHasher> {
    match scheme {
        PasswordHashing::Bcrypt => Arc::new(BcryptPasswordHasher::new(bcrypt_cost)),
        PasswordHashing::Sha1 => Arc::new(Sha1PasswordHasher),
    }
}
