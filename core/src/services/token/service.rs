//! Main token service implementation

use std::collections::HashSet;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::{Claims, TokenPair, UserIdentity};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Issues and verifies HS256-signed access tokens
///
/// All state is fixed at construction, so one instance is shared across
/// requests behind an `Arc`.
pub struct TokenService {
    config: TokenServiceConfig,
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Signing secret, issuer and default access TTL
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or a validation error if the secret or issuer is empty
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.secret.is_empty() {
            return Err(DomainError::Validation {
                message: "token secret must not be empty".to_string(),
            });
        }
        if config.issuer.is_empty() {
            return Err(DomainError::Validation {
                message: "token issuer must not be empty".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        // Expiry and issuer are checked by hand after the signature, in that
        // order, so the library only verifies structure and signature.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();

        Ok(Self {
            config,
            header: Header::new(Algorithm::HS256),
            encoding_key,
            decoding_key,
            validation,
        })
    }

    pub fn issuer(&self) -> &str {
        &self.config.issuer
    }

    pub fn access_token_ttl(&self) -> Duration {
        self.config.access_token_ttl
    }

    /// Generates a token pair with the default access TTL
    pub fn generate_pair(&self, identity: &UserIdentity) -> Result<TokenPair, DomainError> {
        self.generate_pair_with_ttl(identity, self.config.access_token_ttl)
    }

    /// Generates a token pair whose access token expires `ttl` from now
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Signed access token plus a fresh UUID v4 refresh token
    /// * `Err(DomainError::Token(TokenGenerationFailed))` - Signing failed or
    ///   the expiry falls outside the representable range
    pub fn generate_pair_with_ttl(
        &self,
        identity: &UserIdentity,
        ttl: Duration,
    ) -> Result<TokenPair, DomainError> {
        let expires_at = Utc::now().checked_add_signed(ttl).ok_or_else(|| {
            tracing::error!(ttl_secs = ttl.num_seconds(), "access token expiry out of range");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })?;
        let claims = Claims::new(identity, self.config.issuer.clone(), expires_at);
        let access_token = self.encode_jwt(&claims)?;
        Ok(TokenPair::new(access_token, Self::generate_refresh_token()))
    }

    /// Validates a token and returns its subject
    ///
    /// Checks run in a fixed order: structure and signature, then expiry,
    /// then issuer. An expired token still yields its identity through
    /// `TokenError::TokenExpired` so callers can attempt a refresh.
    pub fn validate(&self, token: &str) -> Result<UserIdentity, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            TokenError::InvalidToken
        })?;
        let claims = data.claims;

        if claims.is_expired_at(Utc::now()) {
            return Err(TokenError::TokenExpired {
                identity: claims.identity(),
            });
        }

        if claims.iss != self.config.issuer {
            return Err(TokenError::InvalidIssuer);
        }

        Ok(claims.identity())
    }

    /// Generates an opaque refresh token
    pub fn generate_refresh_token() -> String {
        Uuid::new_v4().to_string()
    }

    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&self.header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "failed to sign access token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }
}
