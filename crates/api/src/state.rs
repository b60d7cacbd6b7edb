use ferrous_lookup_application::use_cases::{
    BlockDomainUseCase, ClearCacheUseCase, GetBlockedDomainsUseCase, GetCacheSummaryUseCase,
    ResolveDomainUseCase, UnblockDomainUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve: Arc<ResolveDomainUseCase>,
    pub cache: CacheUseCases,
    pub access: AccessUseCases,
}

#[derive(Clone)]
pub struct CacheUseCases {
    pub get_summary: Arc<GetCacheSummaryUseCase>,
    pub clear: Arc<ClearCacheUseCase>,
}

#[derive(Clone)]
pub struct AccessUseCases {
    pub block: Arc<BlockDomainUseCase>,
    pub unblock: Arc<UnblockDomainUseCase>,
    pub get_blocked: Arc<GetBlockedDomainsUseCase>,
}
