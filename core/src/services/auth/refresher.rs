//! Seam between the request middleware and the session refresh flow.

use async_trait::async_trait;

use crate::domain::entities::TokenPair;
use crate::errors::DomainResult;

/// Exchanges a refresh token for a new token pair
#[async_trait]
pub trait SessionRefresher: Send + Sync {
    async fn refresh(&self, user_id: &str, refresh_token: &str) -> DomainResult<TokenPair>;
}
