use crate::DomainError;
use fancy_regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DOMAIN_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9.-]+\.[a-z]{2,}$").expect("domain format regex is valid")
});

/// A normalized, format-checked domain name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(String);

impl DomainName {
    /// Trim, lower-case, strip every trailing dot.
    pub fn normalize(name: &str) -> String {
        name.trim().to_lowercase().trim_end_matches('.').to_string()
    }

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = Self::normalize(raw);
        if Self::has_valid_format(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(DomainError::InvalidDomainFormat(normalized))
        }
    }

    pub fn has_valid_format(normalized: &str) -> bool {
        DOMAIN_FORMAT.is_match(normalized).unwrap_or(false)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last label, e.g. `com` for `www.example.com`.
    pub fn tld(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// `true` when `self` equals `pattern` or is a strict subdomain of it.
    pub fn matches_pattern(domain: &str, pattern: &str) -> bool {
        domain == pattern
            || (domain.len() > pattern.len()
                && domain.ends_with(pattern)
                && domain.as_bytes()[domain.len() - pattern.len() - 1] == b'.')
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
