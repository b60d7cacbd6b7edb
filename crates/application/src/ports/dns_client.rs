use async_trait::async_trait;
use ferrous_lookup_domain::{DomainError, LookupAnswer, RecordType};

/// Single-question upstream lookup.
///
/// Implementations report the outcome of one (domain, record type) question:
/// - `Ok(answer)` with the values found (possibly empty)
/// - `Err(DomainError::NxDomain)` when the name does not exist at all
/// - `Err(DomainError::NoAnswer { .. })` when the name exists but has no such record
/// - `Err(DomainError::NoNameservers(_))` when every upstream refused or failed
/// - `Err(DomainError::QueryTimeout)` when the lookup budget ran out
#[async_trait]
pub trait DnsClient: Send + Sync {
    async fn lookup(&self, domain: &str, record_type: RecordType)
        -> Result<LookupAnswer, DomainError>;
}
