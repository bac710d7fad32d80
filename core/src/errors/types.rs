//! Authentication and token error types

use thiserror::Error;

use crate::domain::entities::token::UserIdentity;

/// Credential, session and permission failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid password")]
    InvalidPassword,

    #[error("user not found")]
    UserNotFound,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("registration is disabled")]
    RegistrationDisabled,

    #[error("session not found")]
    SessionNotFound,

    #[error("refresh token does not match the active session")]
    SessionMismatch,

    #[error("session has expired")]
    SessionExpired,

    /// The session was rotated by a concurrent refresh
    #[error("session was replaced concurrently")]
    StaleSession,

    #[error("access denied")]
    InsufficientPermissions,
}

/// Access token validation and issuance failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed, badly signed or carrying undecodable claims
    #[error("invalid token")]
    InvalidToken,

    /// Signature is valid but `exp` has passed; the subject is still known
    #[error("token has expired")]
    TokenExpired { identity: UserIdentity },

    #[error("invalid issuer")]
    InvalidIssuer,

    #[error("token generation failed")]
    TokenGenerationFailed,
}
