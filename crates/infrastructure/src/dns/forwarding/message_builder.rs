//! DNS Message Builder
//!
//! Constructs single-question query messages in wire format using
//! `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use simsam_dns_domain::{DnsQuery, DomainError};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive query for `query` and return its id with the
    /// serialized bytes.
    ///
    /// The message carries:
    /// - a random ID for request/response matching
    /// - the RD (Recursion Desired) flag
    /// - a single question, name spelled exactly as received
    pub fn build_query(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(&query.domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", query.domain, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(&query.record_type));
        question.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .add_query(question);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
