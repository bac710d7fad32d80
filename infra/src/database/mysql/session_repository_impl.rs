//! MySQL implementation of the SessionRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sancho_core::domain::entities::Session;
use sancho_core::errors::DomainError;
use sancho_core::repositories::SessionRepository;

use super::internal;

/// MySQL implementation of SessionRepository
///
/// `sessions.user_id` is the primary key, so a user never has more than one row.
pub struct MySqlSessionRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSessionRepository {
    /// Create a new MySQL session repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for MySqlSessionRepository {
    async fn save(&self, session: Session) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO sessions (user_id, refresh_token, expires_at)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE
                refresh_token = VALUES(refresh_token),
                expires_at = VALUES(expires_at)
        "#;

        sqlx::query(query)
            .bind(&session.user_id)
            .bind(&session.refresh_token)
            .bind(session.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| internal("Failed to save session", e))?;

        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Session>, DomainError> {
        let query = r#"
            SELECT user_id, refresh_token, expires_at
            FROM sessions
            WHERE user_id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| internal("Failed to find session", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Session {
            user_id: row
                .try_get("user_id")
                .map_err(|e| internal("Failed to get user_id", e))?,
            refresh_token: row
                .try_get("refresh_token")
                .map_err(|e| internal("Failed to get refresh_token", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| internal("Failed to get expires_at", e))?,
        }))
    }

    async fn replace(
        &self,
        expected_refresh_token: &str,
        session: Session,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE sessions
            SET refresh_token = ?, expires_at = ?
            WHERE user_id = ? AND refresh_token = ?
        "#;

        let result = sqlx::query(query)
            .bind(&session.refresh_token)
            .bind(session.expires_at)
            .bind(&session.user_id)
            .bind(expected_refresh_token)
            .execute(&self.pool)
            .await
            .map_err(|e| internal("Failed to replace session", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, user_id: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| internal("Failed to delete session", e))?;

        Ok(result.rows_affected() > 0)
    }
}
