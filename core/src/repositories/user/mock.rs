//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::entities::Account;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    delay: Option<Duration>,
    fail: AtomicBool,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            delay: None,
            fail: AtomicBool::new(false),
        }
    }

    /// Every call sleeps for `delay` before touching the map
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Make subsequent calls fail with an internal error
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Remove an account, simulating deletion by another process
    pub async fn remove(&self, id: &str) {
        self.accounts.write().await.remove(id);
    }

    async fn enter(&self) -> Result<(), DomainError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "mock user repository failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Account>, DomainError> {
        self.enter().await?;
        Ok(self.accounts.read().await.get(id).cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, DomainError> {
        self.enter().await?;
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.login.as_deref() == Some(login))
            .cloned())
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError> {
        self.enter().await?;
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.phone_number.as_deref() == Some(phone_number))
            .cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        self.enter().await?;
        let mut accounts = self.accounts.write().await;

        let taken = accounts.values().any(|existing| {
            (account.login.is_some() && existing.login == account.login)
                || (account.phone_number.is_some() && existing.phone_number == account.phone_number)
        });
        if taken {
            return Err(AuthError::UserAlreadyExists.into());
        }

        accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }
}
