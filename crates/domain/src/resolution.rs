use crate::{BlockReason, RecordSet};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    Recursive,
    Iterative,
    Multi,
}

impl ResolutionMode {
    /// Unknown or empty modes fall back to recursive.
    pub fn from_request(mode: Option<&str>) -> Self {
        match mode.map(|m| m.trim().to_lowercase()).as_deref() {
            Some("iterative") => ResolutionMode::Iterative,
            Some("multi") => ResolutionMode::Multi,
            _ => ResolutionMode::Recursive,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionMode::Recursive => "recursive",
            ResolutionMode::Iterative => "iterative",
            ResolutionMode::Multi => "multi",
        }
    }

    /// Only recursive lookups may be answered straight from the cache.
    pub fn reads_cache(&self) -> bool {
        matches!(self, ResolutionMode::Recursive)
    }
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    pub domain: String,
    pub mode: ResolutionMode,
}

impl ResolutionRequest {
    pub fn new(domain: impl Into<String>, mode: ResolutionMode) -> Self {
        Self {
            domain: domain.into(),
            mode,
        }
    }
}

/// One observability record of a pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub name: &'static str,
    pub status: String,
    pub info: String,
}

impl TraceStep {
    pub fn new(name: &'static str, status: impl Into<String>) -> Self {
        Self {
            name,
            status: status.into(),
            info: String::new(),
        }
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }
}

/// Record set and TTL produced by a lookup strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecords {
    pub records: RecordSet,
    pub ttl: u32,
}

impl ResolvedRecords {
    pub fn new(records: RecordSet, ttl: u32) -> Self {
        Self { records, ttl }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IterativeStage {
    pub name: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ns: Option<Vec<String>>,
    pub ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IterativeTimings {
    pub root_to_tld_ms: u64,
    pub tld_to_auth_ms: u64,
    pub auth_to_ip_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IterativeDetails {
    pub steps: Vec<IterativeStage>,
    pub timings: IterativeTimings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiLatency {
    #[serde(rename = "A")]
    pub a: u64,
    #[serde(rename = "AAAA")]
    pub aaaa: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiDetails {
    #[serde(rename = "A")]
    pub a: Vec<String>,
    #[serde(rename = "AAAA")]
    pub aaaa: Vec<String>,
    /// `"A"`, `"AAAA"` or `"none"`.
    pub faster: &'static str,
    pub latency_ms: MultiLatency,
}

/// Final outcome of one resolution request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Blocked {
        domain: String,
        reason: BlockReason,
        steps: Vec<TraceStep>,
    },
    Resolved {
        domain: String,
        mode: ResolutionMode,
        cached: bool,
        records: RecordSet,
        ttl: u32,
        steps: Vec<TraceStep>,
        iterative: Option<IterativeDetails>,
        multi: Option<MultiDetails>,
    },
    TimedOut {
        domain: String,
        mode: ResolutionMode,
        steps: Vec<TraceStep>,
        timeout_secs: u64,
    },
}

impl Resolution {
    pub fn steps(&self) -> &[TraceStep] {
        match self {
            Resolution::Blocked { steps, .. }
            | Resolution::Resolved { steps, .. }
            | Resolution::TimedOut { steps, .. } => steps,
        }
    }
}
