//! Delivery surcharge rule backed by the business meta cache.

use crate::errors::DomainResult;

use super::meta_cache::MetaCache;

/// Add the delivery surcharge to `discounted_amount` when `amount` exceeds the threshold
///
/// `amount` is the order total before discount; the surcharge applies only
/// when it is strictly greater than the current threshold.
pub fn apply_delivery_punishment(
    meta: &MetaCache,
    amount: i64,
    discounted_amount: i64,
) -> DomainResult<i64> {
    let meta = meta.try_get()?;
    if amount > meta.delivery_punishment_threshold {
        Ok(discounted_amount + meta.delivery_punishment_value)
    } else {
        Ok(discounted_amount)
    }
}
