//! Configuration for the token service

use chrono::Duration;
use sancho_shared::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HMAC signing secret
    pub secret: String,
    /// Issuer written into and required from every token
    pub issuer: String,
    /// Access token lifetime used by `generate_pair`
    pub access_token_ttl: Duration,
}

impl TokenServiceConfig {
    pub fn new(secret: impl Into<String>, issuer: impl Into<String>, access_token_ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            access_token_ttl,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self::new(
            config.secret.clone(),
            config.issuer.clone(),
            Duration::seconds(config.access_token_expiry),
        )
    }
}
