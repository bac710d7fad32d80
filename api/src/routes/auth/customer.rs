use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{CustomerRegisterRequest, RegisteredResponse};
use crate::handlers::ApiError;

/// Handler for POST /api/v1/auth/customer/register
///
/// # Request Body
///
/// ```json
/// { "phoneNumber": "+79990001122", "name": "Anna" }
/// ```
///
/// `name` is optional. Responds 201 with `{ "userId": "..." }`, or 409 when
/// the phone number is already registered.
pub async fn register_customer(
    state: web::Data<AppState>,
    request: web::Json<CustomerRegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let request = request.into_inner();
    if !is_phone_number(&request.phone_number) {
        return Err(sancho_core::DomainError::Validation {
            message: "phoneNumber must contain digits only".to_string(),
        }
        .into());
    }

    let user_id = state
        .auth_service
        .register_customer(&request.phone_number, request.name)
        .await?;

    Ok(HttpResponse::Created().json(RegisteredResponse { user_id }))
}

fn is_phone_number(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
