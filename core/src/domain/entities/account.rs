//! Account entity for admins, workers and customers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;
use super::token::UserIdentity;

/// Persisted account record
///
/// Staff accounts (admins and workers) authenticate with login and password.
/// Customers are identified by phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier (UUID v4 string)
    pub id: String,

    pub role: Role,

    /// Staff login
    pub login: Option<String>,

    /// Stored password hash, never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,

    /// Customer phone number
    pub phone_number: Option<String>,

    pub name: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Account {
    fn new(role: Role) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            login: None,
            password_hash: None,
            phone_number: None,
            name: None,
            created_at: Utc::now(),
        }
    }

    /// Creates an admin account
    pub fn new_admin(login: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
            password_hash: Some(password_hash.into()),
            ..Self::new(Role::Admin)
        }
    }

    /// Creates a worker account
    pub fn new_worker(
        login: impl Into<String>,
        password_hash: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            login: Some(login.into()),
            password_hash: Some(password_hash.into()),
            name: Some(name.into()),
            ..Self::new(Role::Worker)
        }
    }

    /// Creates a customer account
    pub fn new_customer(phone_number: impl Into<String>, name: Option<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
            name,
            ..Self::new(Role::Customer)
        }
    }

    /// Token payload projection of the account
    pub fn identity(&self) -> UserIdentity {
        UserIdentity::new(self.id.clone(), self.role)
    }
}
