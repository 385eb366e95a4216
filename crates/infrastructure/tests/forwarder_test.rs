use hickory_proto::op::ResponseCode;
use hickory_proto::rr::RData;
use simsam_dns_application::ports::UpstreamForwarder;
use simsam_dns_domain::{DnsQuery, DomainError, RecordType};
use simsam_dns_infrastructure::dns::UdpForwarder;
use std::time::Duration;
use tokio::net::UdpSocket;

mod helpers;
use helpers::{a_record, MockBehavior, MockDnsServer};

fn forwarder_for(server: &MockDnsServer, timeout_ms: u64) -> UdpForwarder {
    UdpForwarder::new(server.addr().to_string(), Duration::from_millis(timeout_ms))
}

#[tokio::test]
async fn test_forward_returns_upstream_answers_verbatim() {
    let server = MockDnsServer::start(MockBehavior::Answer(vec![
        a_record("other.org.", [198, 51, 100, 7]),
        a_record("other.org.", [198, 51, 100, 8]),
    ]))
    .await;
    let forwarder = forwarder_for(&server, 1000);

    let answers = forwarder
        .forward(&DnsQuery::new("other.org.", RecordType::A))
        .await
        .unwrap();

    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0].name().to_ascii(), "other.org.");
    assert!(matches!(answers[0].data(), Some(RData::A(a)) if a.0.octets() == [198, 51, 100, 7]));
    assert!(matches!(answers[1].data(), Some(RData::A(a)) if a.0.octets() == [198, 51, 100, 8]));
    assert_eq!(server.received(), 1);
}

#[tokio::test]
async fn test_forward_empty_answer_is_success() {
    let server = MockDnsServer::start(MockBehavior::Rcode(ResponseCode::NXDomain)).await;
    let forwarder = forwarder_for(&server, 1000);

    let answers = forwarder
        .forward(&DnsQuery::new("missing.org.", RecordType::A))
        .await
        .unwrap();

    assert!(answers.is_empty());
}

#[tokio::test]
async fn test_forward_timeout_when_upstream_silent() {
    let server = MockDnsServer::start(MockBehavior::Silent).await;
    let forwarder = forwarder_for(&server, 100);

    let err = forwarder
        .forward(&DnsQuery::new("other.org.", RecordType::A))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::TransportTimeout { .. }));
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn test_forward_rejects_mismatched_id() {
    let server = MockDnsServer::start(MockBehavior::WrongId).await;
    let forwarder = forwarder_for(&server, 1000);

    let err = forwarder
        .forward(&DnsQuery::new("other.org.", RecordType::A))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::InvalidDnsResponse(_)));
}

#[tokio::test]
async fn test_forward_rejects_garbage_reply() {
    let server = MockDnsServer::start(MockBehavior::Garbage).await;
    let forwarder = forwarder_for(&server, 1000);

    let err = forwarder
        .forward(&DnsQuery::new("other.org.", RecordType::A))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::InvalidDnsResponse(_)));
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn test_forward_to_closed_port_fails() {
    let closed = {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        socket.local_addr().unwrap()
    };
    let forwarder = UdpForwarder::new(closed.to_string(), Duration::from_millis(300));

    let err = forwarder
        .forward(&DnsQuery::new("other.org.", RecordType::A))
        .await
        .unwrap_err();

    assert!(err.is_transport_error());
}

#[tokio::test]
async fn test_forward_to_unresolvable_host_fails() {
    let forwarder = UdpForwarder::new("no-such-host.invalid:53", Duration::from_millis(500));

    let err = forwarder
        .forward(&DnsQuery::new("other.org.", RecordType::A))
        .await
        .unwrap_err();

    assert!(err.is_transport_error());
}

#[test]
fn test_upstream_describes_server_address() {
    let forwarder = UdpForwarder::new("192.0.2.53:53", Duration::from_secs(2));
    assert_eq!(forwarder.upstream(), "192.0.2.53:53");
}
