//! Mapping of domain errors onto HTTP responses
//!
//! Every `DomainError` variant resolves to a fixed status, error code and
//! message. Infrastructure failures are logged with their full context and
//! reach the client only as an opaque body.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sancho_core::{AuthError, DomainError, TokenError};
use sancho_shared::{error_codes, ErrorResponse};
use thiserror::Error;
use validator::ValidationErrors;

/// Error type returned by route handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid request data: {0}")]
    Validation(#[from] ValidationErrors),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => error_parts(error).0,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(error) => handle_domain_error(error),
            ApiError::Validation(errors) => handle_validation_errors(errors),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Domain(error.into())
    }
}

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code, message) = error_parts(error);

    if error.is_infrastructure() || status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = ?error, %status, "request failed");
    } else {
        tracing::debug!(error = %error, %status, "request rejected");
    }

    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// 400 response listing the failing fields
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("fields", fields),
    )
}

/// Status, error code and client-facing message for each variant
pub fn error_parts(error: &DomainError) -> (StatusCode, &'static str, String) {
    match error {
        DomainError::Validation { message } => {
            (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, message.clone())
        }
        DomainError::NotFound { resource } => (
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        ),
        DomainError::Conflict { message } => {
            (StatusCode::CONFLICT, error_codes::CONFLICT, message.clone())
        }
        DomainError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            "Unauthorized".to_string(),
        ),
        DomainError::Cancelled { .. } | DomainError::MetaNotInitialized => (
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
            "Service temporarily unavailable".to_string(),
        ),
        DomainError::ExhaustedRetries { .. } | DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "An internal error occurred".to_string(),
        ),
        DomainError::Auth(auth_error) => auth_error_parts(auth_error),
        DomainError::Token(token_error) => token_error_parts(token_error),
    }
}

fn auth_error_parts(error: &AuthError) -> (StatusCode, &'static str, String) {
    match error {
        AuthError::UserNotFound => (
            StatusCode::NOT_FOUND,
            error_codes::USER_NOT_FOUND,
            "User not found".to_string(),
        ),
        AuthError::InvalidPassword => (
            StatusCode::UNAUTHORIZED,
            error_codes::INVALID_CREDENTIALS,
            "Invalid password".to_string(),
        ),
        AuthError::UserAlreadyExists => (
            StatusCode::CONFLICT,
            error_codes::USER_ALREADY_EXISTS,
            "User already exists".to_string(),
        ),
        AuthError::RegistrationDisabled => (
            StatusCode::FORBIDDEN,
            error_codes::REGISTRATION_DISABLED,
            "Registration is disabled".to_string(),
        ),
        AuthError::SessionNotFound | AuthError::SessionMismatch | AuthError::SessionExpired => (
            StatusCode::UNAUTHORIZED,
            error_codes::SESSION_INVALID,
            "Session is invalid. Please login again".to_string(),
        ),
        AuthError::StaleSession => (
            StatusCode::CONFLICT,
            error_codes::SESSION_CONFLICT,
            "Session was refreshed by another request".to_string(),
        ),
        AuthError::InsufficientPermissions => (
            StatusCode::FORBIDDEN,
            error_codes::FORBIDDEN,
            "Access denied".to_string(),
        ),
    }
}

fn token_error_parts(error: &TokenError) -> (StatusCode, &'static str, String) {
    match error {
        TokenError::InvalidToken | TokenError::InvalidIssuer => (
            StatusCode::UNAUTHORIZED,
            error_codes::TOKEN_INVALID,
            "Unauthorized".to_string(),
        ),
        TokenError::TokenExpired { .. } => (
            StatusCode::UNAUTHORIZED,
            error_codes::TOKEN_EXPIRED,
            "Token has expired".to_string(),
        ),
        TokenError::TokenGenerationFailed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "An internal error occurred".to_string(),
        ),
    }
}
