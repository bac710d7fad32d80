//! Lookup used when generating short order codes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::DomainError;

/// Answers whether an order code is already taken
#[async_trait]
pub trait OrderCodeLookup: Send + Sync {
    /// Whether an order created at or after `since` already uses `code`
    async fn exists_since(&self, code: &str, since: DateTime<Utc>) -> Result<bool, DomainError>;
}
