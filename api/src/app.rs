//! Application state and route table

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::JsonPayloadError,
    web, App, HttpRequest, HttpResponse,
};
use sancho_core::{
    AuthService, MetaCache, Role, SessionRefresher, SessionRepository, TokenService,
    UserRepository,
};
use sancho_shared::{error_codes, ErrorResponse, SessionCookieConfig};

use crate::middleware::{JwtAuth, RequestIdHeader};
use crate::routes::{auth, meta};

/// Auth service over whichever storage backend was selected at startup
pub type DynAuthService = AuthService<dyn UserRepository, dyn SessionRepository>;

/// Shared state handed to every handler
pub struct AppState {
    pub auth_service: Arc<DynAuthService>,
    pub token_service: Arc<TokenService>,
    pub meta_cache: Arc<MetaCache>,
    pub cookie: SessionCookieConfig,
}

impl AppState {
    pub fn new(
        auth_service: Arc<DynAuthService>,
        token_service: Arc<TokenService>,
        meta_cache: Arc<MetaCache>,
        cookie: SessionCookieConfig,
    ) -> Self {
        Self {
            auth_service,
            token_service,
            meta_cache,
            cookie,
        }
    }

    /// Middleware admitting `role` and everything ranked above it
    pub fn guard(&self, role: Role) -> JwtAuth {
        let refresher: Arc<dyn SessionRefresher> = self.auth_service.clone();
        JwtAuth::new(Arc::clone(&self.token_service), refresher, self.cookie.clone()).require(role)
    }
}

/// Create the application with all routes and the request id layer
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(RequestIdHeader)
        .configure(|cfg| configure(cfg, state))
}

/// Register state, body limits and every route
pub fn configure(cfg: &mut web::ServiceConfig, state: web::Data<AppState>) {
    let customer = state.guard(Role::Customer);
    let worker = state.guard(Role::Worker);
    let admin = state.guard(Role::Admin);

    cfg.app_data(state)
        .app_data(web::JsonConfig::default().limit(16 * 1024).error_handler(json_error))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/admin/register", web::post().to(auth::register_admin))
                        .route("/admin/login", web::post().to(auth::login_admin))
                        .service(
                            web::resource("/worker/register")
                                .wrap(admin.clone())
                                .route(web::post().to(auth::register_worker)),
                        )
                        .route("/worker/login", web::post().to(auth::login_worker))
                        .route("/customer/register", web::post().to(auth::register_customer))
                        .service(
                            web::resource("/logout")
                                .wrap(customer.clone())
                                .route(web::post().to(auth::logout)),
                        )
                        .service(
                            web::resource("/me")
                                .wrap(customer)
                                .route(web::get().to(auth::me)),
                        ),
                )
                .service(
                    web::resource("/meta")
                        .route(web::get().to(meta::get_meta).wrap(worker))
                        .route(web::put().to(meta::put_meta).wrap(admin)),
                ),
        );
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "sancho-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Malformed JSON bodies answer with the standard error shape
fn json_error(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = error.to_string();
    actix_web::error::InternalError::from_response(
        error,
        HttpResponse::BadRequest().json(ErrorResponse::new(error_codes::BAD_REQUEST, message)),
    )
    .into()
}
