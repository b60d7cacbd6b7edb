//! DNS Message Builder
//!
//! Constructs single-question recursive queries in wire format using
//! `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use ferrous_lookup_domain::{DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query with a random ID and the RD flag set.
    ///
    /// Returns the ID alongside the bytes so the caller can match the reply.
    pub fn build_query(
        domain: &str,
        record_type: RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(domain)
            .map_err(|_| DomainError::InvalidDomainFormat(domain.to_string()))?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);
        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).map_err(|e| {
            DomainError::UpstreamFailure(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok((id, buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_carries_id_and_rd_flag() {
        let (id, bytes) = MessageBuilder::build_query("example.com", RecordType::A).unwrap();

        assert!(bytes.len() > 12);
        assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), id);
        assert_eq!(bytes[2] & 0x01, 0x01, "RD flag should be set");
        assert_eq!(u16::from_be_bytes([bytes[4], bytes[5]]), 1, "one question");
    }

    #[test]
    fn test_every_supported_type_builds() {
        for record_type in RecordType::ALL {
            let (_, bytes) = MessageBuilder::build_query("example.com", record_type).unwrap();
            let qtype = u16::from_be_bytes([bytes[bytes.len() - 4], bytes[bytes.len() - 3]]);
            assert_eq!(qtype, record_type.to_u16(), "{record_type}");
        }
    }

    #[test]
    fn test_fqdn_tld_query_builds() {
        assert!(MessageBuilder::build_query("com.", RecordType::NS).is_ok());
    }
}
