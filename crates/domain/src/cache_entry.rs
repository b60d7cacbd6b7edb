use crate::RecordSet;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TTL: u32 = 300;

/// Placeholder shown when an entry carries no address.
pub const NO_IP_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub records: RecordSet,
    /// Insertion instant, seconds since the Unix epoch.
    pub timestamp: i64,
    pub ttl: u32,
}

impl CacheEntry {
    pub fn new(records: RecordSet, timestamp: i64, ttl: u32) -> Self {
        Self {
            records,
            timestamp,
            ttl,
        }
    }

    pub fn expires_at(&self) -> i64 {
        self.timestamp + i64::from(self.ttl)
    }

    pub fn is_live(&self, now: i64) -> bool {
        now < self.expires_at()
    }

    /// Sweep criterion; an entry exactly at its expiry instant survives a sweep
    /// but is no longer served.
    pub fn is_sweepable(&self, now: i64) -> bool {
        self.expires_at() < now
    }

    pub fn remaining_seconds(&self, now: i64) -> i64 {
        (self.expires_at() - now).max(0)
    }

    pub fn summarize(&self, now: i64) -> CacheSummary {
        CacheSummary {
            expires_at: self.expires_at(),
            remaining_seconds: self.remaining_seconds(now),
            ttl: self.ttl,
            first_ip: self
                .records
                .first_ip()
                .unwrap_or(NO_IP_PLACEHOLDER)
                .to_string(),
            types: self.records.types(),
        }
    }
}

/// Read-only view of one cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheSummary {
    pub expires_at: i64,
    pub remaining_seconds: i64,
    pub ttl: u32,
    pub first_ip: String,
    pub types: Vec<String>,
}
