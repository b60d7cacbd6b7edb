#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_lookup_application::ports::{CacheMaintenancePort, CacheSweepOutcome};
use ferrous_lookup_domain::DomainError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockCacheMaintenancePort {
    sweep_calls: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
    removed_per_sweep: Arc<AtomicU64>,
}

impl MockCacheMaintenancePort {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub fn set_removed_per_sweep(&self, removed: u64) {
        self.removed_per_sweep.store(removed, Ordering::Relaxed);
    }

    pub fn sweep_call_count(&self) -> u64 {
        self.sweep_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CacheMaintenancePort for MockCacheMaintenancePort {
    async fn run_sweep_cycle(&self) -> Result<CacheSweepOutcome, DomainError> {
        self.sweep_calls.fetch_add(1, Ordering::Relaxed);

        if *self.should_fail.read().await {
            return Err(DomainError::Persistence("mock sweep failure".to_string()));
        }

        Ok(CacheSweepOutcome {
            entries_removed: self.removed_per_sweep.load(Ordering::Relaxed) as usize,
            cache_size: 10,
        })
    }
}
