//! Ferrous Lookup Domain Layer
pub mod access;
pub mod cache_entry;
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod resolution;

pub use access::{AccessDecision, BlockReason};
pub use cache_entry::{CacheEntry, CacheSummary, DEFAULT_TTL, NO_IP_PLACEHOLDER};
pub use config::{
    AccessConfig, CacheConfig, CliOverrides, Config, ConfigError, LogFormat, LoggingConfig,
    ResolverConfig, ServerConfig,
};
pub use dns_record::{LookupAnswer, RecordSet, RecordType, NO_RECORDS_MESSAGE, NXDOMAIN_MESSAGE};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use resolution::{
    IterativeDetails, IterativeStage, IterativeTimings, MultiDetails, MultiLatency, Resolution,
    ResolutionMode, ResolutionRequest, ResolvedRecords, TraceStep,
};
