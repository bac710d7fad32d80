//! Main authentication service implementation

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use constant_time_eq::constant_time_eq;

use crate::domain::entities::{Account, Role, Session, TokenPair};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{SessionRepository, UserRepository};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::PasswordHasher;
use super::refresher::SessionRefresher;

/// Authentication service orchestrating login, registration and refresh flows
///
/// Repositories may be concrete types or trait objects
/// (`AuthService<dyn UserRepository, dyn SessionRepository>`).
pub struct AuthService<U, S>
where
    U: UserRepository + ?Sized,
    S: SessionRepository + ?Sized,
{
    /// Account persistence
    user_repository: Arc<U>,
    /// Session persistence
    session_repository: Arc<S>,
    /// Token issuance
    token_service: Arc<TokenService>,
    /// Password hashing scheme
    password_hasher: Arc<dyn PasswordHasher>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, S> AuthService<U, S>
where
    U: UserRepository + ?Sized,
    S: SessionRepository + ?Sized,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for account persistence
    /// * `session_repository` - Repository for refresh sessions
    /// * `token_service` - Token issuance and validation
    /// * `password_hasher` - Scheme used for stored passwords
    /// * `config` - Per-role TTLs, registration switch and persistence deadline
    pub fn new(
        user_repository: Arc<U>,
        session_repository: Arc<S>,
        token_service: Arc<TokenService>,
        password_hasher: Arc<dyn PasswordHasher>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            session_repository,
            token_service,
            password_hasher,
            config,
        }
    }

    pub fn config(&self) -> &AuthServiceConfig {
        &self.config
    }

    /// Register an admin account
    ///
    /// No session is created; the admin acquires one by logging in.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Identifier of the new account
    /// * `Err(AuthError::RegistrationDisabled)` - Admin self-registration is switched off
    /// * `Err(AuthError::UserAlreadyExists)` - The login is taken
    pub async fn register_admin(&self, login: &str, password: &str) -> DomainResult<String> {
        if !self.config.allow_admin_registration {
            return Err(AuthError::RegistrationDisabled.into());
        }

        self.ensure_login_free(login).await?;
        let password_hash = self.hash_password(password).await?;
        let account = self
            .with_deadline(
                "create_account",
                self.user_repository.create(Account::new_admin(login, password_hash)),
            )
            .await?;

        tracing::info!(user_id = %account.id, "admin registered");
        Ok(account.id)
    }

    /// Register a worker account on behalf of an admin
    pub async fn register_worker(
        &self,
        login: &str,
        password: &str,
        name: &str,
    ) -> DomainResult<String> {
        self.ensure_login_free(login).await?;
        let password_hash = self.hash_password(password).await?;
        let account = self
            .with_deadline(
                "create_account",
                self.user_repository.create(Account::new_worker(login, password_hash, name)),
            )
            .await?;

        tracing::info!(user_id = %account.id, "worker registered");
        Ok(account.id)
    }

    /// Register a customer by phone number
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Identifier of the new account
    /// * `Err(AuthError::UserAlreadyExists)` - The phone number is registered
    pub async fn register_customer(
        &self,
        phone_number: &str,
        name: Option<String>,
    ) -> DomainResult<String> {
        let existing = self
            .with_deadline("find_account", self.user_repository.find_by_phone(phone_number))
            .await?;
        if existing.is_some() {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let account = self
            .with_deadline(
                "create_account",
                self.user_repository.create(Account::new_customer(phone_number, name)),
            )
            .await?;

        tracing::info!(user_id = %account.id, "customer registered");
        Ok(account.id)
    }

    /// Log an admin in and open a session
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Access token with the admin TTL and a persisted refresh token
    /// * `Err(AuthError::UserNotFound)` - No admin uses this login
    /// * `Err(AuthError::InvalidPassword)` - Password does not match the stored hash
    pub async fn login_admin(&self, login: &str, password: &str) -> DomainResult<TokenPair> {
        self.login_staff(Role::Admin, login, password).await
    }

    /// Log a worker in and open a session
    pub async fn login_worker(&self, login: &str, password: &str) -> DomainResult<TokenPair> {
        self.login_staff(Role::Worker, login, password).await
    }

    /// Exchange a refresh token for a new pair and rotate the session
    ///
    /// The session is replaced only while it still holds `refresh_token`, so
    /// of two concurrent refreshes presenting the same token exactly one
    /// succeeds and the other fails with `AuthError::StaleSession`.
    pub async fn refresh(&self, user_id: &str, refresh_token: &str) -> DomainResult<TokenPair> {
        let session = self
            .with_deadline("find_session", self.session_repository.find_by_user_id(user_id))
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        if !constant_time_eq(session.refresh_token.as_bytes(), refresh_token.as_bytes()) {
            tracing::warn!(user_id, "refresh token does not match active session");
            return Err(AuthError::SessionMismatch.into());
        }

        if session.is_expired() {
            return Err(AuthError::SessionExpired.into());
        }

        let account = self
            .with_deadline("find_account", self.user_repository.find_by_id(user_id))
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let (pair, rotated) = self.new_session(&account)?;
        let replaced = self
            .with_deadline(
                "replace_session",
                self.session_repository.replace(refresh_token, rotated),
            )
            .await?;
        if !replaced {
            tracing::warn!(user_id, "session rotated concurrently");
            return Err(AuthError::StaleSession.into());
        }

        tracing::debug!(user_id, role = %account.role, "session refreshed");
        Ok(pair)
    }

    /// Drop the session of a user
    ///
    /// Outstanding access tokens stay valid until they expire.
    pub async fn logout(&self, user_id: &str) -> DomainResult<()> {
        let existed = self
            .with_deadline("delete_session", self.session_repository.delete(user_id))
            .await?;
        tracing::info!(user_id, existed, "session closed");
        Ok(())
    }

    async fn login_staff(&self, role: Role, login: &str, password: &str) -> DomainResult<TokenPair> {
        let account = self
            .with_deadline("find_account", self.user_repository.find_by_login(login))
            .await?
            .filter(|account| account.role == role)
            .ok_or(AuthError::UserNotFound)?;

        let stored_hash = account
            .password_hash
            .clone()
            .ok_or(AuthError::InvalidPassword)?;
        if !self.verify_password(password, stored_hash).await? {
            tracing::warn!(user_id = %account.id, %role, "invalid password");
            return Err(AuthError::InvalidPassword.into());
        }

        let (pair, session) = self.new_session(&account)?;
        self.with_deadline("save_session", self.session_repository.save(session))
            .await?;

        tracing::info!(user_id = %account.id, %role, "logged in");
        Ok(pair)
    }

    /// Issue a pair for the account's current role and the matching session
    fn new_session(&self, account: &Account) -> DomainResult<(TokenPair, Session)> {
        let pair = self.token_service.generate_pair_with_ttl(
            &account.identity(),
            self.config.access_ttl.for_role(account.role),
        )?;
        let refresh_ttl = self.config.refresh_ttl.for_role(account.role);
        let session = Session::new(account.id.clone(), pair.refresh_token.clone(), refresh_ttl)
            .ok_or_else(|| {
                tracing::error!(
                    ttl_secs = refresh_ttl.num_seconds(),
                    "session expiry out of range"
                );
                DomainError::Token(TokenError::TokenGenerationFailed)
            })?;
        Ok((pair, session))
    }

    async fn ensure_login_free(&self, login: &str) -> DomainResult<()> {
        let existing = self
            .with_deadline("find_account", self.user_repository.find_by_login(login))
            .await?;
        match existing {
            Some(_) => Err(AuthError::UserAlreadyExists.into()),
            None => Ok(()),
        }
    }

    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let hasher = Arc::clone(&self.password_hasher);
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing task failed: {}", e),
            })?
    }

    async fn verify_password(&self, password: &str, stored_hash: String) -> DomainResult<bool> {
        let hasher = Arc::clone(&self.password_hasher);
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification task failed: {}", e),
            })?
    }

    /// Run a persistence call under the configured deadline
    async fn with_deadline<T, F>(&self, operation: &str, call: F) -> DomainResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        match tokio::time::timeout(self.config.persistence_timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(
                    operation,
                    timeout = ?self.config.persistence_timeout,
                    "persistence call timed out"
                );
                Err(DomainError::Cancelled {
                    operation: operation.to_string(),
                })
            }
        }
    }
}

#[async_trait]
impl<U, S> SessionRefresher for AuthService<U, S>
where
    U: UserRepository + ?Sized,
    S: SessionRepository + ?Sized,
{
    async fn refresh(&self, user_id: &str, refresh_token: &str) -> DomainResult<TokenPair> {
        AuthService::refresh(self, user_id, refresh_token).await
    }
}
