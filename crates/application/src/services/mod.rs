mod domain_matcher;
mod ttl_cache;

pub use domain_matcher::DomainMatcher;
pub use ttl_cache::TtlCache;
