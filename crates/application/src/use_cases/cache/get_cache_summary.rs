use ferrous_lookup_domain::CacheSummary;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::services::TtlCache;

pub struct GetCacheSummaryUseCase {
    cache: Arc<TtlCache>,
}

impl GetCacheSummaryUseCase {
    pub fn new(cache: Arc<TtlCache>) -> Self {
        Self { cache }
    }

    /// Entries keyed by domain in lexical order.
    pub fn execute(&self) -> BTreeMap<String, CacheSummary> {
        self.cache.summary()
    }
}
