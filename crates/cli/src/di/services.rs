use super::Stores;
use ferrous_lookup_application::{
    ports::SystemClock,
    services::{DomainMatcher, TtlCache},
};
use ferrous_lookup_domain::Config;
use std::sync::Arc;
use tracing::info;

pub struct Services {
    pub cache: Arc<TtlCache>,
    pub matcher: Arc<DomainMatcher>,
}

impl Services {
    pub fn new(config: &Config, stores: &Stores) -> Self {
        let cache = Arc::new(TtlCache::load(
            stores.cache.clone(),
            Arc::new(SystemClock),
            config.resolver.default_ttl,
        ));
        let matcher = Arc::new(DomainMatcher::load(
            stores.blacklist.clone(),
            stores.whitelist.as_ref(),
        ));

        info!(
            cache_entries = cache.len(),
            blacklist = matcher.blacklist_len(),
            whitelist = matcher.whitelist().len(),
            "State restored"
        );

        Self { cache, matcher }
    }
}
