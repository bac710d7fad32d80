//! Mock implementation of SessionRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::entities::Session;
use crate::errors::DomainError;

use super::trait_::SessionRepository;

/// Mock session repository for testing
pub struct MockSessionRepository {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    write_delay: Option<Duration>,
}

impl MockSessionRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            write_delay: None,
        }
    }

    /// Writes sleep for `delay` before being applied
    pub fn with_write_delay(mut self, delay: Duration) -> Self {
        self.write_delay = Some(delay);
        self
    }

    /// Overwrite a stored session directly
    pub async fn insert(&self, session: Session) {
        self.sessions
            .write()
            .await
            .insert(session.user_id.clone(), session);
    }

    pub async fn get(&self, user_id: &str) -> Option<Session> {
        self.sessions.read().await.get(user_id).cloned()
    }

    async fn pause(&self) {
        if let Some(delay) = self.write_delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for MockSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn save(&self, session: Session) -> Result<(), DomainError> {
        self.pause().await;
        self.insert(session).await;
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Session>, DomainError> {
        Ok(self.get(user_id).await)
    }

    async fn replace(
        &self,
        expected_refresh_token: &str,
        session: Session,
    ) -> Result<bool, DomainError> {
        self.pause().await;
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&session.user_id) {
            Some(current) if current.refresh_token == expected_refresh_token => {
                *current = session;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, user_id: &str) -> Result<bool, DomainError> {
        Ok(self.sessions.write().await.remove(user_id).is_some())
    }
}
