mod clear_cache;
mod get_cache_summary;

pub use clear_cache::ClearCacheUseCase;
pub use get_cache_summary::GetCacheSummaryUseCase;
