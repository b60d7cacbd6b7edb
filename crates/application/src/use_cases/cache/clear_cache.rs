use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::TtlCache;

pub struct ClearCacheUseCase {
    cache: Arc<TtlCache>,
}

impl ClearCacheUseCase {
    pub fn new(cache: Arc<TtlCache>) -> Self {
        Self { cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> usize {
        let removed = self.cache.clear_all().await;
        info!(removed, "Cache cleared");
        removed
    }
}
