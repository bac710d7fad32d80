pub mod auth;
pub mod meta;

pub use auth::{
    AccessTokenResponse, CustomerRegisterRequest, MeResponse, RegisteredResponse,
    StaffCredentialsRequest, WorkerRegisterRequest,
};
pub use meta::MetaRequest;
