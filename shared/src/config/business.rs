//! Initial business meta

use serde::{Deserialize, Serialize};

/// Delivery surcharge rule published into the meta cache at boot
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct BusinessConfig {
    /// Orders strictly above this amount pay the surcharge
    pub delivery_punishment_threshold: i64,

    /// Surcharge added to the discounted amount
    pub delivery_punishment_value: i64,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            delivery_punishment_threshold: 400,
            delivery_punishment_value: 100,
        }
    }
}
