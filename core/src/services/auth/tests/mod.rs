
use std::sync::Arc;

use chrono::Duration;

use crate::repositories::{MockSessionRepository, MockUserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig, BcryptPasswordHasher, RoleTtl};
use crate::services::token::{TokenService, TokenServiceConfig};

pub(super) struct Fixture {
    pub service: AuthService<MockUserRepository, MockSessionRepository>,
    pub users: Arc<MockUserRepository>,
    pub sessions: Arc<MockSessionRepository>,
    pub tokens: Arc<TokenService>,
}

pub(super) fn test_config() -> AuthServiceConfig {
    AuthServiceConfig {
        access_ttl: RoleTtl {
            customer: Duration::minutes(60),
            worker: Duration::minutes(30),
            admin: Duration::minutes(15),
        },
        refresh_ttl: RoleTtl {
            customer: Duration::days(30),
            worker: Duration::days(7),
            admin: Duration::days(1),
        },
        allow_admin_registration: true,
        persistence_timeout: std::time::Duration::from_secs(1),
    }
}

pub(super) fn fixture_with(
    users: MockUserRepository,
    sessions: MockSessionRepository,
    config: AuthServiceConfig,
) -> Fixture {
    let users = Arc::new(users);
    let sessions = Arc::new(sessions);
    let tokens = Arc::new(
        TokenService::new(TokenServiceConfig::new("secret", "sancho", Duration::minutes(15))).unwrap(),
    );
    let service = AuthService::new(
        Arc::clone(&users),
        Arc::clone(&sessions),
        Arc::clone(&tokens),
        Arc::new(BcryptPasswordHasher::new(4)),
        config,
    );
    Fixture {
        service,
        users,
        sessions,
        tokens,
    }
}

pub(super) fn fixture() -> Fixture {
    fixture_with(
        MockUserRepository::new(),
        MockSessionRepository::new(),
        test_config(),
    )
}
