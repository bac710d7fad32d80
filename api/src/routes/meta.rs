//! Business meta endpoints

use actix_web::{web, HttpResponse};
use sancho_core::BusinessMeta;
use validator::Validate;

use crate::app::AppState;
use crate::dto::MetaRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for GET /api/v1/meta (worker and above)
pub async fn get_meta(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let meta = state.meta_cache.try_get()?;
    Ok(HttpResponse::Ok().json(meta.as_ref()))
}

/// Handler for PUT /api/v1/meta (admin only)
///
/// Publishes the submitted value as a whole; concurrent readers observe
/// either the previous or the new meta.
pub async fn put_meta(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<MetaRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let meta = BusinessMeta::from(request.into_inner());
    state.meta_cache.set(meta);

    tracing::info!(admin_id = %auth.user_id, "business meta replaced");
    Ok(HttpResponse::Ok().json(meta))
}
