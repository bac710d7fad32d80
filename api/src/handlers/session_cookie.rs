//! Refresh token cookie construction

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use sancho_shared::SessionCookieConfig;

/// Cookie carrying a freshly issued refresh token
pub fn refresh_cookie(config: &SessionCookieConfig, refresh_token: &str) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), refresh_token.to_owned())
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(config.max_age))
        .finish()
}

/// Cookie instructing the client to drop its refresh token
pub fn removal_cookie(config: &SessionCookieConfig) -> Cookie<'static> {
    let mut cookie = refresh_cookie(config, "");
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_cookie_attributes() {
        let header = refresh_cookie(&SessionCookieConfig::default(), "abc").to_string();
        assert!(header.starts_with("refresh-token=abc"));
        assert!(header.contains("HttpOnly"));
        assert!(header.contains("Secure"));
        assert!(header.contains("SameSite=Lax"));
        assert!(header.contains("Max-Age=2592000"));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = removal_cookie(&SessionCookieConfig::default());
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
