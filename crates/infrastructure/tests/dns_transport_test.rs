use hickory_proto::op::Message;
use rootwalk_application::ports::DnsTransport;
use rootwalk_domain::{DnsQuery, DomainError, RecordType};
use rootwalk_infrastructure::dns::codec::MessageBuilder;
use rootwalk_infrastructure::dns::UdpTransport;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

mod helpers;
use helpers::*;

fn loopback() -> SocketAddr {
    "127.0.0.1:0".parse().unwrap()
}

fn www_a_query() -> (u16, Vec<u8>) {
    MessageBuilder::build_query(&DnsQuery::new("www.example.com".parse().unwrap(), RecordType::A))
        .unwrap()
}

async fn echo_server() -> MockDnsServer {
    let handler: Handler = Arc::new(|request: &Message| {
        let mut response = response_to(request);
        response.add_answer(a("www.example.com.", "192.0.2.1".parse().unwrap()));
        Some(encode(&response))
    });
    MockDnsServer::start(loopback(), handler).await.unwrap()
}

#[test]
fn test_udp_transport_protocol_name() {
    assert_eq!(UdpTransport::new().protocol_name(), "UDP");
}

#[tokio::test]
async fn test_udp_round_trip() {
    let server = echo_server().await;
    let transport = UdpTransport::new();

    let (id, query) = www_a_query();

    let bytes = transport
        .send(server.addr(), &query, Duration::from_secs(2))
        .await
        .unwrap();

    let reply = Message::from_vec(&bytes).unwrap();
    assert_eq!(reply.id(), id);
    assert_eq!(reply.answers().len(), 1);
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_silent_server_times_out() {
    let handler: Handler = Arc::new(|_: &Message| None);
    let server = MockDnsServer::start(loopback(), handler).await.unwrap();
    let transport = UdpTransport::new();

    let err = transport
        .send(server.addr(), &[0u8; 12], Duration::from_millis(100))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::QueryTimeout {
            server: server.addr()
        }
    );
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn test_reply_over_limit_is_oversized() {
    let handler: Handler = Arc::new(|request: &Message| {
        let mut response = response_to(request);
        for i in 0..8u8 {
            response.add_answer(a("www.example.com.", [192, 0, 2, i].into()));
        }
        Some(encode(&response))
    });
    let server = MockDnsServer::start(loopback(), handler).await.unwrap();
    let transport = UdpTransport::new().with_max_response_size(64);

    let (_, query) = www_a_query();

    let err = transport
        .send(server.addr(), &query, Duration::from_secs(2))
        .await
        .unwrap_err();

    match err {
        DomainError::OversizedResponse { server: from, size } => {
            assert_eq!(from, server.addr());
            assert!(size > 64);
        }
        other => panic!("expected OversizedResponse, got {:?}", other),
    }
}
