use hickory_proto::rr::Record;
use simsam_dns_domain::DomainError;

/// Supplies the parsed records of the zone, once, at startup.
pub trait ZoneSource: Send + Sync {
    /// All records of the zone. A syntax error anywhere fails the whole
    /// read with [`DomainError::ZoneLoad`]; partial zones are never returned.
    fn records(&self) -> Result<Vec<Record>, DomainError>;

    fn describe(&self) -> String;
}
