use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{RegisteredResponse, StaffCredentialsRequest, WorkerRegisterRequest};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

use super::token_response;

/// Handler for POST /api/v1/auth/worker/register
///
/// Mounted behind the admin gate.
pub async fn register_worker(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<WorkerRegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let user_id = state
        .auth_service
        .register_worker(&request.login, &request.password, &request.name)
        .await?;

    tracing::info!(admin_id = %auth.user_id, worker_id = %user_id, "worker account created");
    Ok(HttpResponse::Created().json(RegisteredResponse { user_id }))
}

/// Handler for POST /api/v1/auth/worker/login
pub async fn login_worker(
    state: web::Data<AppState>,
    request: web::Json<StaffCredentialsRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let pair = state
        .auth_service
        .login_worker(&request.login, &request.password)
        .await?;

    Ok(token_response(pair, &state.cookie))
}
