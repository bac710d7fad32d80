//! Authentication route handlers
//!
//! - Admin self-registration and login
//! - Worker registration (admin only) and login
//! - Customer registration
//! - Logout and current identity

pub mod admin;
pub mod customer;
pub mod session;
pub mod worker;

pub use admin::{login_admin, register_admin};
pub use customer::register_customer;
pub use session::{logout, me};
pub use worker::{login_worker, register_worker};

use actix_web::HttpResponse;
use sancho_core::TokenPair;
use sancho_shared::SessionCookieConfig;

use crate::dto::AccessTokenResponse;
use crate::handlers::refresh_cookie;

/// 200 with the access token in the body and the refresh token in a cookie
pub(crate) fn token_response(pair: TokenPair, cookie: &SessionCookieConfig) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(refresh_cookie(cookie, &pair.refresh_token))
        .json(AccessTokenResponse {
            access_token: pair.access_token,
        })
}
