//! HTTP surface of the Sancho backend
//!
//! Exposes the authentication routes, the role-gated middleware and the
//! business meta endpoints. `main.rs` wires configuration, storage and the
//! server; everything here is also used directly by the integration tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{configure, create_app, AppState, DynAuthService};
