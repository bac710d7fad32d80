//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    /// A persistence call did not finish before its deadline
    #[error("Operation cancelled: {operation}")]
    Cancelled { operation: String },

    #[error("business meta is not set")]
    MetaNotInitialized,

    #[error("Gave up after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Whether the error comes from infrastructure rather than the caller
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            DomainError::Internal { .. }
                | DomainError::Cancelled { .. }
                | DomainError::MetaNotInitialized
                | DomainError::ExhaustedRetries { .. }
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
