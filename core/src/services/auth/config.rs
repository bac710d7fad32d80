//! Configuration for the authentication service

use chrono::Duration;
use sancho_shared::{AuthConfig, RoleTtlConfig};

use crate::domain::entities::Role;

/// Lifetime per authenticating role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTtl {
    pub customer: Duration,
    pub worker: Duration,
    pub admin: Duration,
}

impl RoleTtl {
    /// Lifetime for `role`; `Unknown` gets the customer value
    pub fn for_role(&self, role: Role) -> Duration {
        match role {
            Role::Admin => self.admin,
            Role::Worker => self.worker,
            Role::Customer | Role::Unknown => self.customer,
        }
    }
}

impl From<RoleTtlConfig> for RoleTtl {
    fn from(config: RoleTtlConfig) -> Self {
        Self {
            customer: Duration::seconds(config.customer),
            worker: Duration::seconds(config.worker),
            admin: Duration::seconds(config.admin),
        }
    }
}

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Access token lifetime per role
    pub access_ttl: RoleTtl,
    /// Session (refresh token) lifetime per role
    pub refresh_ttl: RoleTtl,
    /// Whether admins may self-register
    pub allow_admin_registration: bool,
    /// Deadline for each persistence call
    pub persistence_timeout: std::time::Duration,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self::from(&AuthConfig::default())
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            access_ttl: config.ttl.access.into(),
            refresh_ttl: config.ttl.refresh.into(),
            allow_admin_registration: config.allow_admin_registration,
            persistence_timeout: std::time::Duration::from_millis(config.persistence_timeout_ms),
        }
    }
}
