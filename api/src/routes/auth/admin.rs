use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{RegisteredResponse, StaffCredentialsRequest};
use crate::handlers::ApiError;

use super::token_response;

/// Handler for POST /api/v1/auth/admin/register
///
/// Open only while `auth.allow_admin_registration` is set; otherwise 403.
///
/// # Request Body
///
/// ```json
/// { "login": "root", "password": "secret123" }
/// ```
///
/// # Response
///
/// 201 Created with `{ "userId": "..." }`
pub async fn register_admin(
    state: web::Data<AppState>,
    request: web::Json<StaffCredentialsRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let user_id = state
        .auth_service
        .register_admin(&request.login, &request.password)
        .await?;

    Ok(HttpResponse::Created().json(RegisteredResponse { user_id }))
}

/// Handler for POST /api/v1/auth/admin/login
///
/// # Response
///
/// 200 OK with `{ "accessToken": "..." }` and the refresh token cookie
///
/// ## Errors
/// - 404 Not Found: no admin with this login
/// - 401 Unauthorized: wrong password
pub async fn login_admin(
    state: web::Data<AppState>,
    request: web::Json<StaffCredentialsRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let pair = state
        .auth_service
        .login_admin(&request.login, &request.password)
        .await?;

    Ok(token_response(pair, &state.cookie))
}
