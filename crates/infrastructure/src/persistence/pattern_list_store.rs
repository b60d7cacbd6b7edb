use ferrous_lookup_application::ports::PatternStore;
use ferrous_lookup_domain::{DomainError, DomainName};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::write_atomic;

/// Line-oriented pattern file: one domain per line, `#` comments and blank
/// lines ignored.
pub struct PatternListStore {
    path: PathBuf,
}

impl PatternListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PatternStore for PatternListStore {
    fn load(&self) -> Result<BTreeSet<String>, DomainError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => {
                return Err(DomainError::IoError(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        Ok(parse_patterns(&text))
    }

    fn save(&self, patterns: &BTreeSet<String>) -> Result<(), DomainError> {
        let mut text = String::new();
        for pattern in patterns {
            text.push_str(pattern);
            text.push('\n');
        }

        write_atomic(&self.path, text.as_bytes())
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.path.display(), e)))
    }
}

fn parse_patterns(text: &str) -> BTreeSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(DomainName::normalize)
        .filter(|pattern| !pattern.is_empty())
        .collect()
}
