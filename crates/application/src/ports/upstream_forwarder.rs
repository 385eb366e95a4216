use async_trait::async_trait;
use hickory_proto::rr::Record;
use simsam_dns_domain::{DnsQuery, DomainError};

/// Relays a single question to the configured upstream resolver.
#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Returns the upstream's answer section verbatim. Any failure of the
    /// exchange surfaces as a transport-class [`DomainError`]; no retries.
    async fn forward(&self, query: &DnsQuery) -> Result<Vec<Record>, DomainError>;

    /// Upstream address, for logging.
    fn upstream(&self) -> String;
}
