use crate::ports::UpstreamForwarder;
use crate::services::RecordIndex;
use hickory_proto::rr::Record;
use simsam_dns_domain::{DnsQuery, DomainError, ResponseStatus};
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of resolving one question.
#[derive(Debug, Clone)]
pub enum ResolutionOutcome {
    /// Answered from the loaded zone. May be empty when the name/type is
    /// absent and forwarding is disabled.
    AuthoritativeHit(Vec<Record>),
    /// Relayed from the upstream resolver, answers verbatim.
    ForwardedHit(Vec<Record>),
    ForwardFailure(DomainError),
}

impl ResolutionOutcome {
    pub fn records(&self) -> &[Record] {
        match self {
            Self::AuthoritativeHit(records) | Self::ForwardedHit(records) => records,
            Self::ForwardFailure(_) => &[],
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            Self::AuthoritativeHit(records) | Self::ForwardedHit(records) => records,
            Self::ForwardFailure(_) => Vec::new(),
        }
    }

    pub fn is_authoritative(&self) -> bool {
        matches!(self, Self::AuthoritativeHit(_))
    }

    pub fn is_forwarded(&self) -> bool {
        matches!(self, Self::ForwardedHit(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ForwardFailure(_))
    }

    pub fn status(&self) -> ResponseStatus {
        if self.is_failure() {
            ResponseStatus::ServFail
        } else {
            ResponseStatus::NoError
        }
    }
}

pub struct ResolveQueryUseCase {
    index: Arc<RecordIndex>,
    forwarder: Option<Arc<dyn UpstreamForwarder>>,
}

impl ResolveQueryUseCase {
    pub fn new(index: Arc<RecordIndex>, forwarder: Option<Arc<dyn UpstreamForwarder>>) -> Self {
        Self { index, forwarder }
    }

    pub fn forwarding_enabled(&self) -> bool {
        self.forwarder.is_some()
    }

    pub async fn execute(&self, query: &DnsQuery) -> ResolutionOutcome {
        let key = query.lookup_key();

        debug!(domain = %query.domain, record_type = %query.record_type, "Received query");

        if let Some(records) = self.index.get(&key) {
            debug!(key = %key, records = records.len(), "Found local record");
            return ResolutionOutcome::AuthoritativeHit(records.to_vec());
        }

        let Some(forwarder) = &self.forwarder else {
            debug!(key = %key, "No local record and forwarding disabled");
            return ResolutionOutcome::AuthoritativeHit(Vec::new());
        };

        debug!(key = %key, upstream = %forwarder.upstream(), "No local record, forwarding query");

        match forwarder.forward(query).await {
            Ok(records) => ResolutionOutcome::ForwardedHit(records),
            Err(e) => {
                warn!(
                    error = %e,
                    domain = %query.domain,
                    record_type = %query.record_type,
                    upstream = %forwarder.upstream(),
                    "Error forwarding request"
                );
                ResolutionOutcome::ForwardFailure(e)
            }
        }
    }
}
