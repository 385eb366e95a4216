//! Mapping between `simsam_dns_domain::RecordType` and `hickory_proto::rr::RecordType`.
//!
//! Both sides carry the raw wire code for types they have no name for, so the
//! conversion is total in each direction.

use hickory_proto::rr::RecordType as HickoryRecordType;
use simsam_dns_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Convert hickory RecordType → domain RecordType (for incoming queries
    /// and loaded records)
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
