use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::Record;
use simsam_dns_domain::DomainError;
use tracing::debug;

/// Decoded upstream reply.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answer section, untouched.
    pub answers: Vec<Record>,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decode `response_bytes` and check it answers the query with
    /// `expected_id`.
    pub fn parse(response_bytes: &[u8], expected_id: u16) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Upstream sent a query instead of a response".to_string(),
            ));
        }

        if message.id() != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response id {} does not match query id {}",
                message.id(),
                expected_id
            )));
        }

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers = message.answers().to_vec();

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            rcode,
            truncated,
            answers,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
