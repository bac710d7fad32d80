//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sancho_core::domain::entities::{Account, Role};
use sancho_core::errors::{AuthError, DomainError};
use sancho_core::repositories::UserRepository;

use super::internal;

const SELECT_ACCOUNT: &str = r#"
    SELECT id, role, login, password_hash, phone_number, name, created_at
    FROM accounts
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let role: String = row
            .try_get("role")
            .map_err(|e| internal("Failed to get role", e))?;

        Ok(Account {
            id: row.try_get("id").map_err(|e| internal("Failed to get id", e))?,
            role: Role::from_name(&role),
            login: row
                .try_get("login")
                .map_err(|e| internal("Failed to get login", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| internal("Failed to get password_hash", e))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| internal("Failed to get phone_number", e))?,
            name: row
                .try_get("name")
                .map_err(|e| internal("Failed to get name", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| internal("Failed to get created_at", e))?,
        })
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<Account>, DomainError> {
        let query = format!("{SELECT_ACCOUNT} WHERE {column} = ? LIMIT 1");
        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| internal("Failed to find account", e))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("id", id).await
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("login", login).await
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("phone_number", phone_number).await
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, role, login, password_hash, phone_number, name, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&account.id)
            .bind(account.role.as_str())
            .bind(&account.login)
            .bind(&account.password_hash)
            .bind(&account.phone_number)
            .bind(&account.name)
            .bind(account.created_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(account),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(AuthError::UserAlreadyExists.into())
            }
            Err(e) => Err(internal("Failed to create account", e)),
        }
    }
}
