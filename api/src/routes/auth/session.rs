use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::MeResponse;
use crate::handlers::{removal_cookie, ApiError};
use crate::middleware::AuthContext;

/// Handler for POST /api/v1/auth/logout
///
/// Deletes the caller's session and clears the refresh cookie. Access tokens
/// already issued stay valid until they expire.
pub async fn logout(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    state.auth_service.logout(&auth.user_id).await?;

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie(&state.cookie))
        .json(serde_json::json!({ "message": "Logged out successfully" })))
}

/// Handler for GET /api/v1/auth/me
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(MeResponse {
        user_id: auth.user_id,
        role: auth.role.to_string(),
    })
}
