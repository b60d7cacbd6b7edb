use ferrous_lookup_application::ports::{CacheSnapshot, CacheStore};
use ferrous_lookup_domain::DomainError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

use super::write_atomic;

/// Cache snapshot stored as one JSON object keyed by domain.
pub struct JsonCacheStore {
    path: PathBuf,
}

impl JsonCacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CacheStore for JsonCacheStore {
    fn load(&self) -> Result<Option<CacheSnapshot>, DomainError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::IoError(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let snapshot: CacheSnapshot = serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::Persistence(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), entries = snapshot.len(), "Cache file read");
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &CacheSnapshot) -> Result<(), DomainError> {
        let json = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        write_atomic(&self.path, &json)
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.path.display(), e)))
    }
}
