use ferrous_lookup_domain::Config;
use ferrous_lookup_infrastructure::persistence::{JsonCacheStore, PatternListStore};
use std::sync::Arc;
use tracing::info;

pub struct Stores {
    pub cache: Arc<JsonCacheStore>,
    pub blacklist: Arc<PatternListStore>,
    pub whitelist: Arc<PatternListStore>,
}

impl Stores {
    pub fn new(config: &Config) -> Self {
        info!(
            cache = %config.cache.path,
            blacklist = %config.access.blacklist_path,
            whitelist = %config.access.whitelist_path,
            "Using on-disk stores"
        );

        Self {
            cache: Arc::new(JsonCacheStore::new(&config.cache.path)),
            blacklist: Arc::new(PatternListStore::new(&config.access.blacklist_path)),
            whitelist: Arc::new(PatternListStore::new(&config.access.whitelist_path)),
        }
    }
}
