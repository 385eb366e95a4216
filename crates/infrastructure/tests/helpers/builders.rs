use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::io::Write;
use std::net::Ipv4Addr;
use tempfile::NamedTempFile;

pub const SAMPLE_ZONE: &str = r#"$ORIGIN example.com.
$TTL 3600
@       IN SOA  ns1.example.com. admin.example.com. (
                2024010101 ; serial
                7200       ; refresh
                3600       ; retry
                1209600    ; expire
                300 )      ; minimum
        IN NS   ns1.example.com.
        IN MX   10 mail.example.com.
        IN MX   20 backup.example.com.
www     IN A    192.0.2.1
www     IN A    192.0.2.2
www     IN TXT  "hello world"
ns1     IN A    192.0.2.53
"#;

pub fn name(s: &str) -> Name {
    Name::from_ascii(s).unwrap()
}

pub fn a_record(owner: &str, ip: [u8; 4]) -> Record {
    Record::from_rdata(
        name(owner),
        300,
        RData::A(A(Ipv4Addr::new(ip[0], ip[1], ip[2], ip[3]))),
    )
}

pub fn write_zone_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Wire-format query the way a stub resolver would send it.
pub fn query_message(id: u16, questions: &[(&str, RecordType)]) -> Vec<u8> {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);

    for (owner, record_type) in questions {
        let mut query = Query::new();
        query.set_name(name(owner));
        query.set_query_type(*record_type);
        query.set_query_class(DNSClass::IN);
        message.add_query(query);
    }

    message.to_vec().unwrap()
}
