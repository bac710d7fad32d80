//! Repository interfaces for persistence owned outside the core.

pub mod order_code;
pub mod session;
pub mod user;

pub use order_code::OrderCodeLookup;
pub use session::SessionRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use session::MockSessionRepository;
#[cfg(test)]
pub use user::MockUserRepository;
