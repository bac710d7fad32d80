use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use sancho_api::{create_app, telemetry, AppState, DynAuthService};
use sancho_core::{
    services::hasher_for, AuthServiceConfig, BusinessMeta, MetaCache, SessionRepository,
    TokenService, TokenServiceConfig, UserRepository,
};
use sancho_infra::{
    database::{create_pool, run_migrations, MySqlSessionRepository, MySqlUserRepository},
    InMemorySessionRepository, InMemoryUserRepository,
};
use sancho_shared::{AppConfig, DatabaseConfig};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    telemetry::init_tracing(&config.logging)?;

    tracing::info!(environment = %config.environment, "starting sancho api");
    if config.auth.jwt.is_using_default_secret() {
        tracing::warn!("auth.jwt.secret is the built-in default; set SANCHO__AUTH__JWT__SECRET");
    }

    let (users, sessions) = build_repositories(&config.database).await?;

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt))?);
    let auth_service: Arc<DynAuthService> = Arc::new(DynAuthService::new(
        users,
        sessions,
        Arc::clone(&token_service),
        hasher_for(config.auth.password_hashing, config.auth.bcrypt_cost),
        AuthServiceConfig::from(&config.auth),
    ));
    let meta_cache = Arc::new(MetaCache::with_meta(BusinessMeta::from(&config.business)));

    let state = web::Data::new(AppState::new(
        auth_service,
        token_service,
        meta_cache,
        config.auth.session.clone(),
    ));

    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "listening");

    let mut server =
        HttpServer::new(move || create_app(state.clone()).wrap(TracingLogger::default()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}

/// MySQL stores when `database.url` is set, in-memory stores otherwise
async fn build_repositories(
    config: &DatabaseConfig,
) -> anyhow::Result<(Arc<dyn UserRepository>, Arc<dyn SessionRepository>)> {
    if !config.is_configured() {
        tracing::warn!("database.url is empty; accounts and sessions are kept in memory");
        return Ok((
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemorySessionRepository::new()),
        ));
    }

    let pool = create_pool(config).await.context("failed to connect to MySQL")?;
    run_migrations(&pool).await.context("failed to apply migrations")?;
    tracing::info!(max_connections = config.max_connections, "database ready");

    Ok((
        Arc::new(MySqlUserRepository::new(pool.clone())),
        Arc::new(MySqlSessionRepository::new(pool)),
    ))
}
