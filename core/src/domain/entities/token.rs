//! Token entities for signed-token authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::Role;

/// Authenticated subject carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub user_id: String,
    pub role: Role,
}

impl UserIdentity {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }
}

/// Claims structure for the token payload
///
/// `exp` travels as an RFC 3339 timestamp so sub-second lifetimes survive
/// the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Role of the subject
    #[serde(rename = "rl")]
    pub role: Role,

    /// Subject (user ID)
    #[serde(rename = "usrId")]
    pub user_id: String,

    /// Issuer
    pub iss: String,

    /// Expiration instant
    pub exp: DateTime<Utc>,
}

impl Claims {
    /// Creates claims for `identity` expiring at `exp`
    pub fn new(identity: &UserIdentity, issuer: impl Into<String>, exp: DateTime<Utc>) -> Self {
        Self {
            role: identity.role,
            user_id: identity.user_id.clone(),
            iss: issuer.into(),
            exp,
        }
    }

    /// Checks if the claims have expired (`exp <= now`)
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now
    }

    pub fn identity(&self) -> UserIdentity {
        UserIdentity::new(self.user_id.clone(), self.role)
    }
}

/// Access token plus opaque refresh token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
