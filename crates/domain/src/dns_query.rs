use super::{LookupKey, RecordType};
use std::sync::Arc;

/// One question of an inbound request (owner name + record type).
///
/// The name is kept exactly as received; case folding only happens when the
/// lookup key is derived, so forwarded queries keep their original spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    pub fn lookup_key(&self) -> LookupKey {
        LookupKey::new(&self.domain, self.record_type)
    }
}
