use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use sancho_core::domain::entities::Account;
use sancho_core::errors::{AuthError, DomainError};
use sancho_core::repositories::UserRepository;

/// Accounts keyed by id, with login and phone number kept unique
#[derive(Default)]
pub struct InMemoryUserRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Account>, DomainError> {
        Ok(self.accounts.read().await.get(id).cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.login.as_deref() == Some(login))
            .cloned())
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.phone_number.as_deref() == Some(phone_number))
            .cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        // Uniqueness check and insert happen under one write lock
        let mut accounts = self.accounts.write().await;

        let login_taken = account.login.is_some()
            && accounts.values().any(|a| a.login == account.login);
        let phone_taken = account.phone_number.is_some()
            && accounts.values().any(|a| a.phone_number == account.phone_number);
        if login_taken || phone_taken || accounts.contains_key(&account.id) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }
}
