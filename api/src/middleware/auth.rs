//! Role-gated access token middleware.
//!
//! Wraps a route or scope and admits a request only when its bearer token
//! is valid and its role ranks at least as high as the required one.
//!
//! An expired but otherwise valid token is not rejected outright: if the
//! request carries a refresh cookie, the session is rotated and the new
//! access token is returned in place of the handler's response. The client
//! then repeats the request with the new token.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use sancho_core::{Role, SessionRefresher, TokenError, TokenService, UserIdentity};
use sancho_shared::SessionCookieConfig;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::dto::AccessTokenResponse;
use crate::handlers::{handle_domain_error, refresh_cookie};

/// Body of a 401 for a missing, malformed or invalid token
pub const UNAUTHORIZED_BODY: &str = "unauthorized";
/// Body of a 401 for an expired token without a refresh cookie
pub const TOKEN_EXPIRED_BODY: &str = "token has expired";
/// Body of a 403 for an insufficient role
pub const ACCESS_DENIED_BODY: &str = "access denied";

/// Authenticated subject injected into request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: String,
    pub role: Role,
}

impl From<UserIdentity> for AuthContext {
    fn from(identity: UserIdentity) -> Self {
        Self {
            user_id: identity.user_id,
            role: identity.role,
        }
    }
}

/// Middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    gate: Rc<Gate>,
}

struct Gate {
    token_service: Arc<TokenService>,
    refresher: Arc<dyn SessionRefresher>,
    cookie: SessionCookieConfig,
    required: Role,
}

impl JwtAuth {
    /// Gate admitting any authenticated role, `Unknown` included
    pub fn new(
        token_service: Arc<TokenService>,
        refresher: Arc<dyn SessionRefresher>,
        cookie: SessionCookieConfig,
    ) -> Self {
        Self {
            gate: Rc::new(Gate {
                token_service,
                refresher,
                cookie,
                required: Role::Unknown,
            }),
        }
    }

    /// Require at least `role`
    pub fn require(self, role: Role) -> Self {
        let gate = Gate {
            token_service: Arc::clone(&self.gate.token_service),
            refresher: Arc::clone(&self.gate.refresher),
            cookie: self.gate.cookie.clone(),
            required: role,
        };
        Self { gate: Rc::new(gate) }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            gate: Rc::clone(&self.gate),
        }))
    }
}

/// Middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    gate: Rc<Gate>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let gate = Rc::clone(&self.gate);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Ok(respond(req, HttpResponse::Unauthorized().body(UNAUTHORIZED_BODY))),
            };

            let identity = match gate.token_service.validate(&token) {
                Ok(identity) => identity,
                Err(TokenError::TokenExpired { identity }) => {
                    let response = gate.refresh(&req, &identity).await;
                    return Ok(respond(req, response));
                }
                Err(error) => {
                    tracing::debug!(%error, path = req.path(), "access token rejected");
                    return Ok(respond(req, HttpResponse::Unauthorized().body(UNAUTHORIZED_BODY)));
                }
            };

            if !identity.role.has_permission(gate.required) {
                tracing::debug!(
                    user_id = %identity.user_id,
                    role = %identity.role,
                    required = %gate.required,
                    "access denied"
                );
                return Ok(respond(req, HttpResponse::Forbidden().body(ACCESS_DENIED_BODY)));
            }

            req.extensions_mut().insert(AuthContext::from(identity));

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

impl Gate {
    /// Rotate the session named by the expired token's subject
    async fn refresh(&self, req: &ServiceRequest, identity: &UserIdentity) -> HttpResponse {
        let refresh_token = match req.cookie(&self.cookie.cookie_name) {
            Some(cookie) => cookie.value().to_owned(),
            None => return HttpResponse::Unauthorized().body(TOKEN_EXPIRED_BODY),
        };

        match self.refresher.refresh(&identity.user_id, &refresh_token).await {
            Ok(pair) => {
                tracing::debug!(user_id = %identity.user_id, "access token refreshed");
                HttpResponse::Ok()
                    .cookie(refresh_cookie(&self.cookie, &pair.refresh_token))
                    .json(AccessTokenResponse {
                        access_token: pair.access_token,
                    })
            }
            Err(error) => handle_domain_error(&error),
        }
    }
}

fn respond<B>(req: ServiceRequest, response: HttpResponse) -> ServiceResponse<EitherBody<B>> {
    req.into_response(response).map_into_right_body()
}

/// Token of an `Authorization: Bearer <token>` header, if well formed
pub fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty() && !token.contains(char::is_whitespace))
        .map(str::to_owned)
}

/// Extractor for handlers behind `JwtAuth`; 401 when the middleware did not run
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized(UNAUTHORIZED_BODY));

        ready(result)
    }
}
