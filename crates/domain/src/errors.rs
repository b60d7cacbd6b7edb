use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain format")]
    InvalidDomainFormat(String),

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("No {record_type} record for {domain}")]
    NoAnswer { domain: String, record_type: String },

    #[error("No usable nameservers for {0}")]
    NoNameservers(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    #[error("DNS query timed out after {0}s")]
    ResolutionTimeout(u64),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
