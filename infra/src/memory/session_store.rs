use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use sancho_core::domain::entities::Session;
use sancho_core::errors::DomainError;
use sancho_core::repositories::SessionRepository;

/// Sessions keyed by user id
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: Session) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(session.user_id.clone(), session);
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Session>, DomainError> {
        Ok(self.sessions.read().await.get(user_id).cloned())
    }

    async fn replace(
        &self,
        expected_refresh_token: &str,
        session: Session,
    ) -> Result<bool, DomainError> {
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
