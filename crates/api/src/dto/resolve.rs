use ferrous_lookup_domain::{
    IterativeDetails, MultiDetails, RecordSet, ResolutionMode, TraceStep,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct ResolveRequest {
    #[serde(default)]
    pub domain: String,
    /// Unknown or missing modes resolve recursively.
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct BlockedResponse {
    pub domain: String,
    pub blocked: bool,
    pub reason: &'static str,
    pub steps: Vec<TraceStep>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ResolvedResponse {
    pub domain: String,
    pub mode: ResolutionMode,
    pub cached: bool,
    pub records: RecordSet,
    pub ttl: u32,
    pub steps: Vec<TraceStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterative: Option<IterativeDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi: Option<MultiDetails>,
}

#[derive(Serialize, Debug, Clone)]
pub struct TimeoutResponse {
    pub domain: String,
    pub cached: bool,
    pub records: RecordSet,
    pub steps: Vec<TraceStep>,
    pub message: String,
}
