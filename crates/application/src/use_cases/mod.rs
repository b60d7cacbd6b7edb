pub mod access;
pub mod cache;
pub mod resolve;

pub use access::{BlockDomainUseCase, GetBlockedDomainsUseCase, UnblockDomainUseCase};
pub use cache::{ClearCacheUseCase, GetCacheSummaryUseCase};
pub use resolve::ResolveDomainUseCase;
