//! Account repository trait.
//!
//! Implementations live in the infrastructure layer; the auth services only
//! see this interface.

use async_trait::async_trait;

use crate::domain::entities::Account;
use crate::errors::DomainError;

/// Repository trait for account persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an account by its identifier
    async fn find_by_id(&self, id: &str) -> Result<Option<Account>, DomainError>;

    /// Find a staff account by login
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account uses this login
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, DomainError>;

    /// Find a customer account by phone number
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError>;

    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Login or phone number taken
    async fn create(&self, account: Account) -> Result<Account, DomainError>;
}
