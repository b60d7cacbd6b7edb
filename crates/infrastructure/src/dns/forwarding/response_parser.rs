use super::record_type_map::RecordTypeMapper;
use ferrous_lookup_domain::{DomainError, RecordType};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use tracing::debug;

/// Reply to one question, reduced to the values of the requested type.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,
    pub rcode: ResponseCode,
    pub truncated: bool,
    pub values: Vec<String>,
    /// Smallest TTL among the records of the requested type.
    pub min_ttl: Option<u32>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parse `response_bytes`, keeping only answers of `record_type`; CNAME
    /// hops and other types in the answer section are skipped.
    pub fn parse(
        response_bytes: &[u8],
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::UpstreamFailure(format!("Failed to parse DNS response: {}", e))
        })?;

        let mut values = Vec::new();
        let mut min_ttl: Option<u32> = None;

        for record in message.answers() {
            if RecordTypeMapper::from_hickory(record.record_type()) != Some(record_type) {
                continue;
            }
            let ttl = record.ttl();
            min_ttl = Some(min_ttl.map_or(ttl, |current| current.min(ttl)));
            values.push(format_value(record_type, record.data()));
        }

        let response = DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            values,
            min_ttl,
        };

        debug!(
            rcode = ?response.rcode,
            record_type = %record_type,
            values = response.values.len(),
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(response)
    }
}

/// Presentation form of one value: names lose their trailing dot, TXT loses
/// surrounding quotes, CAA becomes `flags tag "value"`.
fn format_value(record_type: RecordType, data: &RData) -> String {
    match (record_type, data) {
        (RecordType::A, RData::A(a)) => a.0.to_string(),
        (RecordType::AAAA, RData::AAAA(aaaa)) => aaaa.0.to_string(),
        (RecordType::TXT, rdata) => rdata.to_string().trim_matches('"').to_string(),
        (RecordType::CAA, rdata) => format_caa(&rdata.to_string()),
        (_, rdata) => rdata.to_string().trim_end_matches('.').to_string(),
    }
}

fn format_caa(text: &str) -> String {
    let mut parts = text.splitn(3, ' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(flags), Some(tag), Some(value)) => {
            format!("{} {} \"{}\"", flags, tag, value.trim().trim_matches('"'))
        }
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caa_value_is_quoted_once() {
        assert_eq!(format_caa("0 issue letsencrypt.org"), "0 issue \"letsencrypt.org\"");
        assert_eq!(
            format_caa("128 iodef \"mailto:sec@example.com\""),
            "128 iodef \"mailto:sec@example.com\""
        );
    }

    #[test]
    fn test_caa_without_value_is_kept() {
        assert_eq!(format_caa("0 issue"), "0 issue");
    }
}
