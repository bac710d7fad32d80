//! MySQL repository implementations

mod session_repository_impl;
mod user_repository_impl;

pub use session_repository_impl::MySqlSessionRepository;
pub use user_repository_impl::MySqlUserRepository;

use sancho_core::errors::DomainError;

/// Map a driver error into the domain's opaque internal error
pub(crate) fn internal(context: &str, error: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("{}: {}", context, error),
    }
}
