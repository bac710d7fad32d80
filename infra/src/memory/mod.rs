//! In-process repository implementations
//!
//! Used when no database URL is configured and by the HTTP tests. State lives
//! only as long as the process.

mod session_store;
mod user_store;

pub use session_store::InMemorySessionRepository;
pub use user_store::InMemoryUserRepository;
