use async_trait::async_trait;
use hickory_proto::rr::Record;
use simsam_dns_application::ports::UpstreamForwarder;
use simsam_dns_domain::{DnsQuery, DomainError, RecordType};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

type Responses = HashMap<(String, RecordType), Result<Vec<Record>, DomainError>>;

/// Upstream stand-in keyed on the exact (name, type) it receives.
#[derive(Clone, Default)]
pub struct MockForwarder {
    responses: Arc<RwLock<Responses>>,
    calls: Arc<RwLock<Vec<DnsQuery>>>,
    unreachable: Arc<RwLock<bool>>,
}

impl MockForwarder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the upstream were down.
    pub fn unreachable() -> Self {
        let mock = Self::new();
        *mock.unreachable.write().unwrap() = true;
        mock
    }

    pub fn set_response(&self, domain: &str, record_type: RecordType, records: Vec<Record>) {
        self.responses
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), Ok(records));
    }

    pub fn set_error(&self, domain: &str, record_type: RecordType, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), Err(error));
    }

    pub fn calls(&self) -> Vec<DnsQuery> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl UpstreamForwarder for MockForwarder {
    async fn forward(&self, query: &DnsQuery) -> Result<Vec<Record>, DomainError> {
        self.calls.write().unwrap().push(query.clone());

        if *self.unreachable.read().unwrap() {
            return Err(DomainError::TransportTimeout {
                server: self.upstream(),
            });
        }

        self.responses
            .read()
            .unwrap()
            .get(&(query.domain.to_string(), query.record_type))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn upstream(&self) -> String {
        "mock-upstream:53".to_string()
    }
}
