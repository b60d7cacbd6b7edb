use super::Services;
use ferrous_lookup_api::{
    state::{AccessUseCases, CacheUseCases},
    AppState,
};
use ferrous_lookup_application::use_cases::{
    BlockDomainUseCase, ClearCacheUseCase, GetBlockedDomainsUseCase, GetCacheSummaryUseCase,
    ResolveDomainUseCase, UnblockDomainUseCase,
};
use ferrous_lookup_domain::Config;
use ferrous_lookup_infrastructure::dns::UpstreamDnsClient;
use std::sync::Arc;
use tracing::{error, info};

pub struct UseCases {
    pub resolve: Arc<ResolveDomainUseCase>,
    pub get_cache_summary: Arc<GetCacheSummaryUseCase>,
    pub clear_cache: Arc<ClearCacheUseCase>,
    pub block: Arc<BlockDomainUseCase>,
    pub unblock: Arc<UnblockDomainUseCase>,
    pub get_blocked: Arc<GetBlockedDomainsUseCase>,
}

impl UseCases {
    /// Fails when no upstream client can be built; answers are never fabricated.
    pub fn new(config: &Config, services: &Services) -> anyhow::Result<Self> {
        let client = UpstreamDnsClient::from_config(&config.resolver).map_err(|e| {
            error!(error = %e, "Failed to initialize upstream DNS client");
            anyhow::anyhow!(e)
        })?;

        info!(
            servers = ?client.servers(),
            timeout_secs = config.resolver.resolve_timeout_secs,
            "Upstream DNS client ready"
        );

        Ok(Self {
            resolve: Arc::new(ResolveDomainUseCase::new(
                Arc::new(client),
                services.matcher.clone(),
                services.cache.clone(),
                &config.resolver,
            )),
            get_cache_summary: Arc::new(GetCacheSummaryUseCase::new(services.cache.clone())),
            clear_cache: Arc::new(ClearCacheUseCase::new(services.cache.clone())),
            block: Arc::new(BlockDomainUseCase::new(services.matcher.clone())),
            unblock: Arc::new(UnblockDomainUseCase::new(services.matcher.clone())),
            get_blocked: Arc::new(GetBlockedDomainsUseCase::new(services.matcher.clone())),
        })
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            resolve: self.resolve,
            cache: CacheUseCases {
                get_summary: self.get_cache_summary,
                clear: self.clear_cache,
            },
            access: AccessUseCases {
                block: self.block,
                unblock: self.unblock,
                get_blocked: self.get_blocked,
            },
        }
    }
}
