#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_lookup_application::ports::{CacheSnapshot, CacheStore, Clock, DnsClient, PatternStore};
use ferrous_lookup_domain::{DomainError, LookupAnswer, RecordType};
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

type Outcome = Result<LookupAnswer, DomainError>;

/// Programmable upstream. Unknown questions answer `NoAnswer`.
#[derive(Clone, Default)]
pub struct MockDnsClient {
    outcomes: Arc<RwLock<HashMap<(String, RecordType), Outcome>>>,
    delays: Arc<RwLock<HashMap<(String, RecordType), Duration>>>,
    calls: Arc<AtomicU64>,
}

impl MockDnsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, domain: &str, record_type: RecordType, values: &[&str], ttl: u32) {
        let answer = LookupAnswer::new(
            values.iter().map(|v| v.to_string()).collect(),
            Some(ttl),
        );
        self.outcomes
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), Ok(answer));
    }

    pub fn set_error(&self, domain: &str, record_type: RecordType, error: DomainError) {
        self.outcomes
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), Err(error));
    }

    /// Every record type of `domain` reports a non-existent domain.
    pub fn set_nxdomain(&self, domain: &str) {
        for record_type in RecordType::ALL {
            self.set_error(domain, record_type, DomainError::NxDomain);
        }
    }

    pub fn set_delay(&self, domain: &str, record_type: RecordType, delay: Duration) {
        self.delays
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), delay);
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DnsClient for MockDnsClient {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<LookupAnswer, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        let key = (domain.to_string(), record_type);
        let delay = self.delays.read().unwrap().get(&key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let outcome = self
            .outcomes
            .read()
            .unwrap()
            .get(&key)
            .cloned();

        outcome.unwrap_or_else(|| {
            Err(DomainError::NoAnswer {
                domain: domain.to_string(),
                record_type: record_type.to_string(),
            })
        })
    }
}

#[derive(Default)]
pub struct InMemoryCacheStore {
    snapshot: Mutex<Option<CacheSnapshot>>,
    saves: AtomicU64,
    fail_load: AtomicBool,
    save_delay: Option<Duration>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: CacheSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
            ..Self::default()
        }
    }

    /// Every save blocks the calling thread, like a slow disk.
    pub fn with_save_delay(delay: Duration) -> Self {
        Self {
            save_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn failing_load() -> Self {
        let store = Self::default();
        store.fail_load.store(true, Ordering::Relaxed);
        store
    }

    pub fn saved(&self) -> Option<CacheSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> u64 {
        self.saves.load(Ordering::Relaxed)
    }
}

impl CacheStore for InMemoryCacheStore {
    fn load(&self) -> Result<Option<CacheSnapshot>, DomainError> {
        if self.fail_load.load(Ordering::Relaxed) {
            return Err(DomainError::Persistence("corrupt snapshot".to_string()));
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }

    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), DomainError> {
        if let Some(delay) = self.save_delay {
            std::thread::sleep(delay);
        }
        self.saves.fetch_add(1, Ordering::Relaxed);
        *self.snapshot.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPatternStore {
    patterns: Mutex<BTreeSet<String>>,
    saves: AtomicU64,
}

impl InMemoryPatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patterns(patterns: &[&str]) -> Self {
        Self {
            patterns: Mutex::new(patterns.iter().map(|p| p.to_string()).collect()),
            saves: AtomicU64::new(0),
        }
    }

    pub fn patterns(&self) -> BTreeSet<String> {
        self.patterns.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> u64 {
        self.saves.load(Ordering::Relaxed)
    }
}

impl PatternStore for InMemoryPatternStore {
    fn load(&self) -> Result<BTreeSet<String>, DomainError> {
        Ok(self.patterns.lock().unwrap().clone())
    }

    fn save(&self, patterns: &BTreeSet<String>) -> Result<(), DomainError> {
        self.saves.fetch_add(1, Ordering::Relaxed);
        *self.patterns.lock().unwrap() = patterns.clone();
        Ok(())
    }
}

pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn at(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    pub fn advance(&self, secs: i64) {
        self.now.fetch_add(secs, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> i64 {
        self.now.load(Ordering::Relaxed)
    }
}
