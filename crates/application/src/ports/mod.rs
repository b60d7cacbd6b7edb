mod cache_maintenance_port;
mod cache_store;
mod clock;
mod dns_client;
mod pattern_store;

pub use cache_maintenance_port::{CacheMaintenancePort, CacheSweepOutcome};
pub use cache_store::{CacheSnapshot, CacheStore};
pub use clock::{Clock, SystemClock};
pub use dns_client::DnsClient;
pub use pattern_store::PatternStore;
