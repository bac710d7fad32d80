//! Refresh session entity.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The single active refresh token of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session expiring `ttl` from now, or `None` when that
    /// instant is out of range
    pub fn new(
        user_id: impl Into<String>,
        refresh_token: impl Into<String>,
        ttl: Duration,
    ) -> Option<Self> {
        let expires_at = Utc::now().checked_add_signed(ttl)?;
        Some(Self {
            user_id: user_id.into(),
            refresh_token: refresh_token.into(),
            expires_at,
        })
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
