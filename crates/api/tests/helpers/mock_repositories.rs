#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_lookup_application::ports::{CacheSnapshot, CacheStore, DnsClient, PatternStore};
use ferrous_lookup_domain::{DomainError, LookupAnswer, RecordType};
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

type Outcome = Result<LookupAnswer, DomainError>;

/// Programmable upstream. Unknown questions answer `NoAnswer`.
#[derive(Clone, Default)]
pub struct MockDnsClient {
    outcomes: Arc<RwLock<HashMap<(String, RecordType), Outcome>>>,
    delay: Arc<RwLock<Option<Duration>>>,
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

    pub fn set_nxdomain(&self, domain: &str) {
        let mut outcomes = self.outcomes.write().unwrap();
        for record_type in RecordType::ALL {
            outcomes.insert((domain.to_string(), record_type), Err(DomainError::NxDomain));
        }
    }

    /// Every lookup sleeps this long before answering.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.write().unwrap() = Some(delay);
    }
}

#[async_trait]
impl DnsClient for MockDnsClient {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<LookupAnswer, DomainError> {
        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let outcome = self
            .outcomes
            .read()
            .unwrap()
            .get(&(domain.to_string(), record_type))
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
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for InMemoryCacheStore {
    fn load(&self) -> Result<Option<CacheSnapshot>, DomainError> {
        Ok(self.snapshot.lock().unwrap().clone())
    }

    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), DomainError> {
        *self.snapshot.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPatternStore {
    patterns: Mutex<BTreeSet<String>>,
}

impl InMemoryPatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patterns(&self) -> BTreeSet<String> {
        self.patterns.lock().unwrap().clone()
    }
}

impl PatternStore for InMemoryPatternStore {
    fn load(&self) -> Result<BTreeSet<String>, DomainError> {
        Ok(self.patterns.lock().unwrap().clone())
    }

    fn save(&self, patterns: &BTreeSet<String>) -> Result<(), DomainError> {
        *self.patterns.lock().unwrap() = patterns.clone();
        Ok(())
    }
}
