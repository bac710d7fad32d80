//! Process-wide holder of the current business meta.
//!
//! Readers take a single atomic load; writers publish a whole replacement.
//! A reader therefore sees either the previous or the next value, never a mix.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::domain::entities::BusinessMeta;
use crate::errors::{DomainError, DomainResult};

/// Lock-free read-mostly cache of `BusinessMeta`
///
/// Shared explicitly through `Arc` (or `web::Data`) rather than a global.
#[derive(Debug)]
pub struct MetaCache {
    current: ArcSwapOption<BusinessMeta>,
}

impl MetaCache {
    /// Create an empty cache; `set` must run before `get`
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    /// Create a cache already holding `meta`
    pub fn with_meta(meta: BusinessMeta) -> Self {
        let cache = Self::new();
        cache.set(meta);
        cache
    }

    /// Publish a full replacement value
    pub fn set(&self, meta: BusinessMeta) {
        self.current.store(Some(Arc::new(meta)));
        tracing::info!(
            threshold = meta.delivery_punishment_threshold,
            value = meta.delivery_punishment_value,
            "business meta published"
        );
    }

    /// Current value
    ///
    /// # Panics
    ///
    /// Panics with "business meta is not set" if called before the first `set`.
    /// Use [`MetaCache::try_get`] where that is recoverable.
    pub fn get(&self) -> Arc<BusinessMeta> {
        match self.current.load_full() {
            Some(meta) => meta,
            None => panic!("business meta is not set"),
        }
    }

    /// Current value, or `DomainError::MetaNotInitialized` before the first `set`
    pub fn try_get(&self) -> DomainResult<Arc<BusinessMeta>> {
        self.current.load_full().ok_or(DomainError::MetaNotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.current.load().is_some()
    }
}

impl Default for MetaCache {
    fn default() -> Self {
        Self::new()
    }
}
