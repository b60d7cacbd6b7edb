use async_trait::async_trait;
use ferrous_lookup_domain::{CacheEntry, CacheSummary, DomainError, DomainName, RecordSet};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error, info, warn};

use crate::ports::{CacheMaintenancePort, CacheSnapshot, CacheStore, CacheSweepOutcome, Clock};

/// Process-wide domain → record snapshot cache with TTL expiry.
///
/// Every mutation rewrites the whole snapshot through the [`CacheStore`].
/// Persistence always runs after the map lock is released, under a separate
/// mutex, so snapshots reach the store in the order they were taken. Mutating
/// calls hand the write to the blocking pool and await it there.
pub struct TtlCache {
    entries: Arc<RwLock<CacheSnapshot>>,
    writer: SnapshotWriter,
    clock: Arc<dyn Clock>,
    default_ttl: u32,
}

#[derive(Clone)]
struct SnapshotWriter {
    entries: Arc<RwLock<CacheSnapshot>>,
    lock: Arc<Mutex<()>>,
    store: Arc<dyn CacheStore>,
}

impl SnapshotWriter {
    fn write(&self) {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let snapshot = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if let Err(e) = self.store.save(&snapshot) {
            warn!(error = %e, entries = snapshot.len(), "Failed to persist cache snapshot");
        }
    }
}

impl TtlCache {
    pub fn new(store: Arc<dyn CacheStore>, clock: Arc<dyn Clock>, default_ttl: u32) -> Self {
        let entries = Arc::new(RwLock::new(CacheSnapshot::new()));
        Self {
            writer: SnapshotWriter {
                entries: Arc::clone(&entries),
                lock: Arc::new(Mutex::new(())),
                store,
            },
            entries,
            clock,
            default_ttl,
        }
    }

    /// Restore the persisted snapshot, then drop whatever already expired.
    ///
    /// A missing snapshot is initialized as empty; an unreadable one is logged
    /// and ignored. Runs before the server starts, so it writes inline.
    pub fn load(store: Arc<dyn CacheStore>, clock: Arc<dyn Clock>, default_ttl: u32) -> Self {
        let cache = Self::new(store, clock, default_ttl);

        match cache.writer.store.load() {
            Ok(Some(snapshot)) => {
                info!(entries = snapshot.len(), "Cache snapshot loaded");
                *cache.write_entries() = snapshot;
            }
            Ok(None) => {
                info!("No cache snapshot found, starting empty");
                cache.writer.write();
            }
            Err(e) => {
                error!(error = %e, "Failed to load cache snapshot, starting empty");
            }
        }

        let removed = cache.evict_expired();
        if removed > 0 {
            cache.writer.write();
            info!(removed, "Expired entries dropped after load");
        }
        cache
    }

    /// Live entry for `domain`. An expired entry is evicted on the way out.
    pub async fn get(&self, domain: &str) -> Option<CacheEntry> {
        let key = DomainName::normalize(domain);
        let now = self.clock.now_secs();

        {
            let entries = self.read_entries();
            match entries.get(&key) {
                None => return None,
                Some(entry) if entry.is_live(now) => return Some(entry.clone()),
                Some(_) => {}
            }
        }

        // A concurrent set() may have refreshed the entry between the locks.
        let evicted = {
            let mut entries = self.write_entries();
            match entries.get(&key) {
                Some(entry) if !entry.is_live(now) => entries.remove(&key).is_some(),
                _ => false,
            }
        };

        if evicted {
            debug!(domain = %key, "Expired cache entry evicted on read");
            self.persist().await;
        }
        None
    }

    /// Insert or overwrite `domain`; `None` or `Some(0)` falls back to the default TTL.
    pub async fn set(&self, domain: &str, records: RecordSet, ttl: Option<u32>) {
        let key = DomainName::normalize(domain);
        let ttl = ttl.filter(|t| *t > 0).unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(records, self.clock.now_secs(), ttl);

        self.write_entries().insert(key.clone(), entry);
        debug!(domain = %key, ttl, "Cache entry stored");

        self.persist().await;
    }

    /// Evict every entry past its expiry; returns how many were removed.
    pub async fn clear_expired(&self) -> usize {
        let removed = self.evict_expired();
        if removed > 0 {
            self.persist().await;
        }
        removed
    }

    pub async fn clear_all(&self) -> usize {
        let count = {
            let mut entries = self.write_entries();
            let count = entries.len();
            entries.clear();
            count
        };

        self.persist().await;
        count
    }

    /// Metadata for every held entry, including not-yet-swept expired ones.
    pub fn summary(&self) -> BTreeMap<String, CacheSummary> {
        let now = self.clock.now_secs();
        self.read_entries()
            .iter()
            .map(|(domain, entry)| (domain.clone(), entry.summarize(now)))
            .collect()
    }

    /// Seconds left before `domain` expires.
    pub async fn remaining_ttl(&self, domain: &str) -> Option<i64> {
        let entry = self.get(domain).await?;
        Some(entry.remaining_seconds(self.clock.now_secs()))
    }

    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    fn evict_expired(&self) -> usize {
        let now = self.clock.now_secs();
        let mut entries = self.write_entries();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_sweepable(now));
        before - entries.len()
    }

    /// The write keeps running if the caller is dropped mid-await.
    async fn persist(&self) {
        let writer = self.writer.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || writer.write()).await {
            error!(error = %e, "Cache persistence task panicked");
        }
    }

    fn read_entries(&self) -> RwLockReadGuard<'_, CacheSnapshot> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, CacheSnapshot> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CacheMaintenancePort for TtlCache {
    async fn run_sweep_cycle(&self) -> Result<CacheSweepOutcome, DomainError> {
        let entries_removed = self.clear_expired().await;
        Ok(CacheSweepOutcome {
            entries_removed,
            cache_size: self.len(),
        })
    }
}
