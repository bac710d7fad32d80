//! Business-wide configuration shared by every request.

use serde::{Deserialize, Serialize};

/// Delivery surcharge rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMeta {
    /// Orders with an amount strictly above this pay the surcharge
    pub delivery_punishment_threshold: i64,
    /// Surcharge added to the discounted amount
    pub delivery_punishment_value: i64,
}

impl BusinessMeta {
    pub fn new(delivery_punishment_threshold: i64, delivery_punishment_value: i64) -> Self {
        Self {
            delivery_punishment_threshold,
            delivery_punishment_value,
        }
    }
}

impl From<&sancho_shared::BusinessConfig> for BusinessMeta {
    fn from(config: &sancho_shared::BusinessConfig) -> Self {
        Self::new(
            config.delivery_punishment_threshold,
            config.delivery_punishment_value,
        )
    }
}
