use ferrous_lookup_domain::DomainError;
use std::collections::BTreeSet;

/// Persistence for a set of domain patterns (blacklist or whitelist).
pub trait PatternStore: Send + Sync {
    /// Normalized patterns; a missing backing file yields an empty set.
    fn load(&self) -> Result<BTreeSet<String>, DomainError>;

    /// Atomically replaces the stored list with `patterns` in sorted order.
    fn save(&self, patterns: &BTreeSet<String>) -> Result<(), DomainError>;
}
