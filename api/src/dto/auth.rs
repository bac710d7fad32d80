use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of the admin register and the staff login routes
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StaffCredentialsRequest {
    #[validate(length(min = 3, max = 64))]
    pub login: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WorkerRegisterRequest {
    #[validate(length(min = 3, max = 64))]
    pub login: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,

    #[validate(length(min = 1, max = 128))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRegisterRequest {
    /// Digits with an optional leading '+'
    #[validate(length(min = 7, max = 16))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredResponse {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: String,
    pub role: String,
}
