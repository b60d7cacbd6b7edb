use super::RecordType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved tag carrying diagnostics instead of record values.
pub const ERROR_TAG: &str = "error";
pub const NXDOMAIN_MESSAGE: &str = "NXDOMAIN (domain does not exist)";
pub const NO_RECORDS_MESSAGE: &str = "No DNS records found";

/// Record-type tag to ordered values, or the single `error` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet(BTreeMap<String, Vec<String>>);

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(message: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(ERROR_TAG.to_string(), vec![message.into()]);
        Self(map)
    }

    pub fn non_existent() -> Self {
        Self::error(NXDOMAIN_MESSAGE)
    }

    pub fn no_records() -> Self {
        Self::error(NO_RECORDS_MESSAGE)
    }

    pub fn insert(&mut self, record_type: RecordType, values: Vec<String>) {
        self.0.insert(record_type.as_str().to_string(), values);
    }

    pub fn get(&self, record_type: RecordType) -> Option<&[String]> {
        self.0.get(record_type.as_str()).map(Vec::as_slice)
    }

    pub fn is_error(&self) -> bool {
        self.0.contains_key(ERROR_TAG)
    }

    pub fn errors(&self) -> &[String] {
        self.0.get(ERROR_TAG).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when the error sentinel reports a non-existent domain.
    pub fn is_non_existent(&self) -> bool {
        self.errors().iter().any(|message| {
            let lower = message.to_lowercase();
            lower.contains("nxdomain") || lower.contains("does not exist")
        })
    }

    /// First `A` value, else first `AAAA` value.
    pub fn first_ip(&self) -> Option<&str> {
        RecordType::ADDRESSES
            .iter()
            .filter_map(|rt| self.get(*rt).and_then(|values| values.first()))
            .map(String::as_str)
            .next()
    }

    pub fn types(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Replace `A`/`AAAA` entries with the non-empty ones from `other`.
    pub fn overlay_addresses(&mut self, other: &RecordSet) {
        for record_type in RecordType::ADDRESSES {
            if let Some(values) = other.get(record_type).filter(|v| !v.is_empty()) {
                self.insert(record_type, values.to_vec());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_sentinel_is_detected() {
        let set = RecordSet::non_existent();
        assert!(set.is_error());
        assert!(set.is_non_existent());
        assert_eq!(set.errors(), &[NXDOMAIN_MESSAGE.to_string()]);
    }

    #[test]
    fn test_no_records_is_not_non_existent() {
        let set = RecordSet::no_records();
        assert!(set.is_error());
        assert!(!set.is_non_existent());
    }

    #[test]
    fn test_first_ip_prefers_a() {
        let mut set = RecordSet::new();
        set.insert(RecordType::AAAA, vec!["2606:4700::1".into()]);
        assert_eq!(set.first_ip(), Some("2606:4700::1"));

        set.insert(RecordType::A, vec!["1.1.1.1".into(), "1.0.0.1".into()]);
        assert_eq!(set.first_ip(), Some("1.1.1.1"));
    }

    #[test]
    fn test_overlay_addresses_skips_empty_values() {
        let mut base = RecordSet::new();
        base.insert(RecordType::A, vec!["10.0.0.1".into()]);
        base.insert(RecordType::MX, vec!["10 mail.example.com".into()]);

        let mut addresses = RecordSet::new();
        addresses.insert(RecordType::A, vec!["10.0.0.2".into()]);
        addresses.insert(RecordType::AAAA, vec![]);

        base.overlay_addresses(&addresses);

        assert_eq!(base.get(RecordType::A), Some(&["10.0.0.2".to_string()][..]));
        assert!(base.get(RecordType::AAAA).is_none());
        assert!(base.get(RecordType::MX).is_some());
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut set = RecordSet::new();
        set.insert(RecordType::A, vec!["1.2.3.4".into()]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"A":["1.2.3.4"]}"#);
    }
}
