//! Shared fixtures for the HTTP tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::Duration;
use sancho_api::{AppState, DynAuthService};
use sancho_core::services::BcryptPasswordHasher;
use sancho_core::{
    AuthServiceConfig, BusinessMeta, MetaCache, Role, SessionRepository, TokenPair, TokenService,
    TokenServiceConfig, UserIdentity, UserRepository,
};
use sancho_infra::{InMemorySessionRepository, InMemoryUserRepository};
use sancho_shared::SessionCookieConfig;

pub const SECRET: &str = "test-secret";
pub const ISSUER: &str = "sancho-test";
pub const ADMIN_LOGIN: &str = "root";
pub const WORKER_LOGIN: &str = "cook";
pub const PASSWORD: &str = "secret-pass";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub users: Arc<InMemoryUserRepository>,
    pub sessions: Arc<InMemorySessionRepository>,
    pub tokens: Arc<TokenService>,
}

pub fn context() -> TestContext {
    context_with(|_| {})
}

pub fn context_with(adjust: impl FnOnce(&mut AuthServiceConfig)) -> TestContext {
    let users = Arc::new(InMemoryUserRepository::new());
    let sessions = Arc::new(InMemorySessionRepository::new());
    let tokens = Arc::new(
        TokenService::new(TokenServiceConfig::new(SECRET, ISSUER, Duration::minutes(15))).unwrap(),
    );

    let mut config = AuthServiceConfig::default();
    config.allow_admin_registration = true;
    adjust(&mut config);

    let user_store: Arc<dyn UserRepository> = users.clone();
    let session_store: Arc<dyn SessionRepository> = sessions.clone();
    let auth_service = Arc::new(DynAuthService::new(
        user_store,
        session_store,
        Arc::clone(&tokens),
        Arc::new(BcryptPasswordHasher::new(4)),
        config,
    ));

    let state = web::Data::new(AppState::new(
        auth_service,
        Arc::clone(&tokens),
        Arc::new(MetaCache::with_meta(BusinessMeta::new(400, 100))),
        SessionCookieConfig::default(),
    ));

    TestContext {
        state,
        users,
        sessions,
        tokens,
    }
}

impl TestContext {
    /// Register and log in the admin account
    pub async fn admin_tokens(&self) -> TokenPair {
        let auth = &self.state.auth_service;
        auth.register_admin(ADMIN_LOGIN, PASSWORD).await.unwrap();
        auth.login_admin(ADMIN_LOGIN, PASSWORD).await.unwrap()
    }

    /// Register and log in a worker account
    pub async fn worker_tokens(&self) -> TokenPair {
        let auth = &self.state.auth_service;
        auth.register_worker(WORKER_LOGIN, PASSWORD, "Cook").await.unwrap();
        auth.login_worker(WORKER_LOGIN, PASSWORD).await.unwrap()
    }

    /// Register a customer and sign an access token for it
    pub async fn customer_token(&self) -> (String, String) {
        let user_id = self
            .state
            .auth_service
            .register_customer("+79990001122", Some("Anna".into()))
            .await
            .unwrap();
        let pair = self
            .tokens
            .generate_pair(&UserIdentity::new(user_id.clone(), Role::Customer))
            .unwrap();
        (user_id, pair.access_token)
    }

    /// Access token for `user_id` that is already expired
    pub fn expired_token(&self, user_id: &str, role: Role) -> String {
        self.tokens
            .generate_pair_with_ttl(&UserIdentity::new(user_id, role), Duration::zero())
            .unwrap()
            .access_token
    }

    /// Identifier of the account holding `login`
    pub async fn user_id_of(&self, login: &str) -> String {
        self.users.find_by_login(login).await.unwrap().unwrap().id
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
