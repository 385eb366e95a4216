use crate::ports::ZoneSource;
use crate::services::RecordIndex;
use hickory_proto::rr::Record;
use simsam_dns_domain::{DomainError, LookupKey, RecordType};
use tracing::{debug, info};

/// Key a zone record is stored under: its owner name and type.
pub fn record_lookup_key(record: &Record) -> LookupKey {
    LookupKey::new(
        &record.name().to_ascii(),
        RecordType::from_u16(u16::from(record.record_type())),
    )
}

/// Reads the zone once and builds the record index from it.
pub struct LoadZoneUseCase;

impl LoadZoneUseCase {
    pub fn execute(source: &dyn ZoneSource) -> Result<RecordIndex, DomainError> {
        let records = source.records()?;

        let mut index = RecordIndex::new();
        for record in records {
            let key = record_lookup_key(&record);
            debug!(key = %key, record = %record, "Loaded record");
            index.put(key, record);
        }

        info!(
            source = %source.describe(),
            keys = index.key_count(),
            records = index.record_count(),
            "Loaded record keys from zone file"
        );

        Ok(index)
    }
}
