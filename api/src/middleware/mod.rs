pub mod auth;
pub mod request_id;

pub use auth::{AuthContext, JwtAuth};
pub use request_id::{RequestId, RequestIdHeader, REQUEST_ID_HEADER};
