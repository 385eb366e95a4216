use hickory_proto::rr::Record;
use simsam_dns_application::ports::ZoneSource;
use simsam_dns_domain::DomainError;

pub struct MockZoneSource {
    result: Result<Vec<Record>, DomainError>,
}

impl MockZoneSource {
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            result: Ok(records),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            result: Err(DomainError::ZoneLoad(reason.to_string())),
        }
    }
}

impl ZoneSource for MockZoneSource {
    fn records(&self) -> Result<Vec<Record>, DomainError> {
        self.result.clone()
    }

    fn describe(&self) -> String {
        "mock zone".to_string()
    }
}
