use sancho_core::BusinessMeta;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Replacement business meta submitted by an admin
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MetaRequest {
    #[validate(range(min = 0))]
    pub delivery_punishment_threshold: i64,

    #[validate(range(min = 0))]
    pub delivery_punishment_value: i64,
}

impl From<MetaRequest> for BusinessMeta {
    fn from(request: MetaRequest) -> Self {
        BusinessMeta::new(
            request.delivery_punishment_threshold,
            request.delivery_punishment_value,
        )
    }
}
