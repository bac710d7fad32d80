//! Short human-readable order codes.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::errors::{DomainError, DomainResult};
use crate::repositories::OrderCodeLookup;

/// Characters order codes are drawn from
pub const ORDER_CODE_ALPHABET: &[u8] = b"ABCDEFGHYJKLMNOPQRCTUVWXYZ0123456789";

/// Length of an order code
pub const ORDER_CODE_LENGTH: usize = 6;

/// Default number of candidates tried before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Generates order codes unique among orders of the last 24 hours
#[derive(Debug, Clone, Copy)]
pub struct OrderCodeGenerator {
    max_attempts: u32,
}

impl OrderCodeGenerator {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Find a code no order created in the last 24 hours uses
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A free 6-character code
    /// * `Err(DomainError::ExhaustedRetries)` - Every candidate was taken
    pub async fn generate<L>(&self, lookup: &L) -> DomainResult<String>
    where
        L: OrderCodeLookup + ?Sized,
    {
        let since = Utc::now() - Duration::hours(24);

        for attempt in 1..=self.max_attempts {
            let candidate = random_code();
            if !lookup.exists_since(&candidate, since).await? {
                return Ok(candidate);
            }
            tracing::debug!(attempt, code = %candidate, "order code collision");
        }

        tracing::error!(attempts = self.max_attempts, "no free order code found");
        Err(DomainError::ExhaustedRetries {
            attempts: self.max_attempts,
        })
    }
}

impl Default for OrderCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

fn random_code() -> String {
    let mut rng = rand::thread_rng();
    (0..ORDER_CODE_LENGTH)
        .map(|_| ORDER_CODE_ALPHABET[rng.gen_range(0..ORDER_CODE_ALPHABET.len())] as char)
        .collect()
}
