use hickory_proto::rr::rdata::{A, MX};
use hickory_proto::rr::{Name, RData, Record};
use simsam_dns_application::services::RecordIndex;
use simsam_dns_application::use_cases::zone::record_lookup_key;
use std::net::Ipv4Addr;

pub fn name(fqdn: &str) -> Name {
    Name::from_ascii(fqdn).unwrap()
}

pub fn a_record(owner: &str, ip: &str) -> Record {
    let addr: Ipv4Addr = ip.parse().unwrap();
    Record::from_rdata(name(owner), 3600, RData::A(A(addr)))
}

pub fn mx_record(owner: &str, preference: u16, exchange: &str) -> Record {
    Record::from_rdata(
        name(owner),
        3600,
        RData::MX(MX::new(preference, name(exchange))),
    )
}

pub fn index_of(records: Vec<Record>) -> RecordIndex {
    records
        .into_iter()
        .map(|record| (record_lookup_key(&record), record))
        .collect()
}
