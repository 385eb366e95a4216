use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::{udp::UdpTransport, DnsTransport};
use async_trait::async_trait;
use hickory_proto::rr::Record;
use simsam_dns_application::ports::UpstreamForwarder;
use simsam_dns_domain::{DnsQuery, DomainError};
use std::time::Duration;
use tracing::debug;

/// Relays unmatched questions to one upstream resolver over UDP.
///
/// Each call is a fresh exchange on its own socket; nothing is pooled,
/// cached or retried.
pub struct UdpForwarder {
    transport: UdpTransport,
    timeout: Duration,
}

impl UdpForwarder {
    /// `server` is `host:port`; host names are resolved on every forward.
    pub fn new(server: impl Into<String>, timeout: Duration) -> Self {
        Self {
            transport: UdpTransport::new(server),
            timeout,
        }
    }

    pub fn server(&self) -> &str {
        self.transport.server()
    }
}

#[async_trait]
impl UpstreamForwarder for UdpForwarder {
    async fn forward(&self, query: &DnsQuery) -> Result<Vec<Record>, DomainError> {
        let (id, request_bytes) = MessageBuilder::build_query(query)?;

        let response = self.transport.send(&request_bytes, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes, id)?;

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            upstream = self.server(),
            rcode = ResponseParser::rcode_to_status(parsed.rcode),
            truncated = parsed.truncated,
            answers = parsed.answers.len(),
            "Upstream answered"
        );

        Ok(parsed.answers)
    }

    fn upstream(&self) -> String {
        self.server().to_string()
    }
}
