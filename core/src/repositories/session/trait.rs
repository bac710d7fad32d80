//! Session repository trait.
//!
//! A user has at most one session. `save` upserts it on login; `replace`
//! rotates it only while the stored token still equals the presented one.

use async_trait::async_trait;

use crate::domain::entities::Session;
use crate::errors::DomainError;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert or overwrite the session of `session.user_id`
    async fn save(&self, session: Session) -> Result<(), DomainError>;

    /// Find the session of a user
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Session>, DomainError>;

    /// Conditionally replace the session of `session.user_id`
    ///
    /// # Arguments
    /// * `expected_refresh_token` - Token the caller validated against
    /// * `session` - The rotated session
    ///
    /// # Returns
    /// * `Ok(true)` - The stored token matched and was replaced
    /// * `Ok(false)` - The stored token changed in the meantime (or the session is gone)
    async fn replace(
        &self,
        expected_refresh_token: &str,
        session: Session,
    ) -> Result<bool, DomainError>;

    /// Delete the session of a user, returning whether one existed
    async fn delete(&self, user_id: &str) -> Result<bool, DomainError>;
}
