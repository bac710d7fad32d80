//! Domain entities representing core business objects.

pub mod account;
pub mod meta;
pub mod role;
pub mod session;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use account::Account;
pub use meta::BusinessMeta;
pub use role::Role;
pub use session::Session;
pub use token::{Claims, TokenPair, UserIdentity};
