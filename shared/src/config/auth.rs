//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "sancho-secret-change-in-production";

/// Upper bound for any configured lifetime: ten years, in seconds
pub const MAX_TTL_SECS: i64 = 10 * 365 * 86400;

/// Token signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Shared HMAC secret for signing tokens
    pub secret: String,

    /// Issuer written into and required from every token
    pub issuer: String,

    /// Access token lifetime in seconds when no per-role value applies
    pub access_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            issuer: String::from("sancho"),
            access_token_expiry: 900, // 15 minutes
        }
    }
}

impl JwtConfig {
    /// Create a new token configuration with secret
    pub fn new(secret: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Lifetimes in seconds for each authenticating role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoleTtlConfig {
    pub customer: i64,
    pub worker: i64,
    pub admin: i64,
}

impl RoleTtlConfig {
    /// Access token lifetimes: customer 1h, worker 30m, admin 15m
    pub fn default_access() -> Self {
        Self {
            customer: 3600,
            worker: 1800,
            admin: 900,
        }
    }

    /// First role whose lifetime is not in `1..=MAX_TTL_SECS`
    pub fn out_of_range(&self) -> Option<(&'static str, i64)> {
        [
            ("customer", self.customer),
            ("worker", self.worker),
            ("admin", self.admin),
        ]
        .into_iter()
        .find(|(_, secs)| !(1..=MAX_TTL_SECS).contains(secs))
    }

    /// Session lifetimes: customer 30d, worker 7d, admin 1d
    pub fn default_refresh() -> Self {
        Self {
            customer: 30 * 86400,
            worker: 7 * 86400,
            admin: 86400,
        }
    }
}

/// Per-role access and refresh lifetimes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TtlConfig {
    pub access: RoleTtlConfig,
    pub refresh: RoleTtlConfig,
}

impl Default for TtlConfig {
    fn default() -> Self {
        Self {
            access: RoleTtlConfig::default_access(),
            refresh: RoleTtlConfig::default_refresh(),
        }
    }
}

/// Refresh token cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionCookieConfig {
    /// Cookie carrying the refresh token
    pub cookie_name: String,

    /// Secure flag (HTTPS only)
    pub secure: bool,

    /// Max-Age in seconds
    pub max_age: i64,
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("refresh-token"),
            secure: true,
            max_age: 2_592_000, // 30 days
        }
    }
}

/// Password hashing scheme for stored credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordHashing {
    /// Salted adaptive hash
    #[default]
    Bcrypt,
    /// Unsalted hex SHA-1, kept for records created by earlier deployments
    Sha1,
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Token configuration
    pub jwt: JwtConfig,

    /// Per-role lifetimes
    pub ttl: TtlConfig,

    /// Refresh cookie configuration
    pub session: SessionCookieConfig,

    /// Password hashing scheme
    pub password_hashing: PasswordHashing,

    /// bcrypt work factor
    pub bcrypt_cost: u32,

    /// Whether `POST /auth/admin/register` is open
    pub allow_admin_registration: bool,

    /// Deadline for each persistence call in milliseconds
    pub persistence_timeout_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            ttl: TtlConfig::default(),
            session: SessionCookieConfig::default(),
            password_hashing: PasswordHashing::default(),
            bcrypt_cost: 12,
            allow_admin_registration: false,
            persistence_timeout_ms: 5000,
        }
    }
}
