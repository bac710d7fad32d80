pub mod error_handler;
pub mod session_cookie;

pub use error_handler::{handle_domain_error, handle_validation_errors, ApiError};
pub use session_cookie::{refresh_cookie, removal_cookie};
