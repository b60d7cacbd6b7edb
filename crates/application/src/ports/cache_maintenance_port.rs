use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;

/// Outcome of an expired-entry sweep.
#[derive(Debug, Default, Clone)]
pub struct CacheSweepOutcome {
    pub entries_removed: usize,
    pub cache_size: usize,
}

/// Port for periodic cache maintenance.
#[async_trait]
pub trait CacheMaintenancePort: Send + Sync {
    async fn run_sweep_cycle(&self) -> Result<CacheSweepOutcome, DomainError>;
}
