use ferrous_lookup_domain::{CacheEntry, DomainError};
use std::collections::HashMap;

pub type CacheSnapshot = HashMap<String, CacheEntry>;

/// Whole-snapshot persistence for the result cache.
///
/// `save` must replace the stored snapshot atomically: a reader of the backing
/// storage sees either the previous snapshot or the new one, never a mix.
pub trait CacheStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<CacheSnapshot>, DomainError>;

    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), DomainError>;
}
