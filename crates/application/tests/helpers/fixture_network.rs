#![allow(dead_code)]

use async_trait::async_trait;
use rootwalk_application::ports::{DnsTransport, EncodedQuery, MessageCodec};
use rootwalk_application::services::IterativeResolver;
use rootwalk_domain::{
    DnsMessage, DnsQuery, DomainError, DomainName, RecordType, ResolverConfig, ResourceRecord,
    ResponseCode,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Fixture network: an in-memory set of nameservers
// ============================================================================

/// What a fixture server does when contacted.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Reply with this message (id and question are filled in from the query).
    Message(DnsMessage),
    /// Reply with this message verbatim, wrong id included.
    Stale(DnsMessage),
    /// Never answer.
    Timeout,
    /// Answer with bytes that do not decode.
    Garbage,
}

#[derive(Default)]
struct Inner {
    by_question: HashMap<(SocketAddr, DomainName, RecordType), Reply>,
    by_server: HashMap<SocketAddr, Reply>,
    contacts: Vec<(SocketAddr, DnsQuery)>,
}

/// Datagram format shared by [`FixtureNetwork`] and [`JsonCodec`].
#[derive(Serialize, Deserialize)]
struct WireQuery {
    id: u16,
    query: DnsQuery,
}

#[derive(Clone, Default)]
pub struct FixtureNetwork {
    inner: Arc<Mutex<Inner>>,
}

impl FixtureNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply for one exact question sent to `server`.
    pub fn on(&self, server: &str, name: &str, record_type: RecordType, reply: Reply) -> &Self {
        self.inner.lock().unwrap().by_question.insert(
            (addr(server), dname(name), record_type),
            reply,
        );
        self
    }

    /// Reply for anything sent to `server` without a more specific entry.
    pub fn on_any(&self, server: &str, reply: Reply) -> &Self {
        self.inner
            .lock()
            .unwrap()
            .by_server
            .insert(addr(server), reply);
        self
    }

    /// Every query the transport carried, in order.
    pub fn contacts(&self) -> Vec<(SocketAddr, DnsQuery)> {
        self.inner.lock().unwrap().contacts.clone()
    }

    pub fn contacts_to(&self, server: &str) -> usize {
        let server = addr(server);
        self.contacts().iter().filter(|(s, _)| *s == server).count()
    }

    fn reply_for(&self, server: SocketAddr, query: &DnsQuery) -> Option<Reply> {
        let inner = self.inner.lock().unwrap();
        inner
            .by_question
            .get(&(server, query.name.clone(), query.record_type))
            .or_else(|| inner.by_server.get(&server))
            .cloned()
    }
}

#[async_trait]
impl DnsTransport for FixtureNetwork {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let wire: WireQuery = serde_json::from_slice(message_bytes)
            .map_err(|e| DomainError::MalformedResponse(e.to_string()))?;

        self.inner
            .lock()
            .unwrap()
            .contacts
            .push((server, wire.query.clone()));

        match self.reply_for(server, &wire.query) {
            Some(Reply::Message(mut message)) => {
                message.id = wire.id;
                message.question = Some(wire.query);
                Ok(serde_json::to_vec(&message).unwrap())
            }
            Some(Reply::Stale(message)) => Ok(serde_json::to_vec(&message).unwrap()),
            Some(Reply::Garbage) => Ok(b"\x00\x01garbage".to_vec()),
            Some(Reply::Timeout) | None => Err(DomainError::QueryTimeout { server }),
        }
    }

    fn protocol_name(&self) -> &'static str {
        "FIXTURE"
    }
}

/// Codec counterpart of [`FixtureNetwork`]: JSON instead of DNS wire format.
#[derive(Default)]
pub struct JsonCodec {
    next_id: AtomicU16,
}

impl MessageCodec for JsonCodec {
    fn encode_query(&self, query: &DnsQuery) -> Result<EncodedQuery, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        let bytes = serde_json::to_vec(&WireQuery {
            id,
            query: query.clone(),
        })
        .map_err(|e| DomainError::MalformedResponse(e.to_string()))?;
        Ok(EncodedQuery { id, bytes })
    }

    fn decode_response(
        &self,
        bytes: &[u8],
        _server: SocketAddr,
    ) -> Result<DnsMessage, DomainError> {
        serde_json::from_slice(bytes).map_err(|e| DomainError::MalformedResponse(e.to_string()))
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn addr(ip: &str) -> SocketAddr {
    SocketAddr::new(ip.parse::<IpAddr>().unwrap(), 53)
}

pub fn dname(name: &str) -> DomainName {
    name.parse().unwrap()
}

pub fn resolver(network: &FixtureNetwork, roots: &[&str]) -> IterativeResolver {
    resolver_with(network, roots, |config| config)
}

pub fn resolver_with(
    network: &FixtureNetwork,
    roots: &[&str],
    tweak: impl FnOnce(ResolverConfig) -> ResolverConfig,
) -> IterativeResolver {
    let config = ResolverConfig::default()
        .with_root_servers(roots.iter().map(|r| r.parse().unwrap()).collect())
        .with_timeout(100);
    IterativeResolver::new(
        &tweak(config),
        Arc::new(network.clone()),
        Arc::new(JsonCodec::default()),
    )
}

fn blank() -> DnsMessage {
    DnsMessage::response_to(0, DnsQuery::new(DomainName::root(), RecordType::A))
}

/// Non-authoritative delegation of `zone` to `nameservers`; `Some(ip)` adds glue.
pub fn referral(zone: &str, nameservers: &[(&str, Option<&str>)]) -> Reply {
    let mut message = blank();
    for (ns, glue) in nameservers {
        message
            .authority
            .push(ResourceRecord::ns(dname(zone), 172800, dname(ns)));
        if let Some(ip) = glue {
            message.additional.push(ResourceRecord::a(
                dname(ns),
                172800,
                ip.parse::<Ipv4Addr>().unwrap(),
            ));
        }
    }
    Reply::Message(message)
}

/// Authoritative reply carrying `records` as the answer section.
pub fn authoritative(records: Vec<ResourceRecord>) -> Reply {
    let mut message = blank();
    message.authoritative = true;
    message.answers = records;
    Reply::Message(message)
}

pub fn a_record(name: &str, ip: &str) -> ResourceRecord {
    ResourceRecord::a(dname(name), 300, ip.parse().unwrap())
}

pub fn cname_record(name: &str, target: &str) -> ResourceRecord {
    ResourceRecord::cname(dname(name), 300, dname(target))
}

pub fn with_rcode(rcode: ResponseCode, authoritative: bool) -> Reply {
    let mut message = blank();
    message.response_code = rcode;
    message.authoritative = authoritative;
    Reply::Message(message)
}

pub const ROOT_1: &str = "10.0.0.1";
pub const ROOT_2: &str = "10.0.0.2";
pub const TLD_TEST: &str = "10.1.0.1";
pub const AUTH_1: &str = "10.2.0.1";
pub const AUTH_2: &str = "10.2.0.2";

/// Two roots delegating `test.` to one TLD server, which delegates
/// `example.test.` to one glued nameserver answering `www.example.test. A`.
pub fn example_test_hierarchy() -> FixtureNetwork {
    let network = FixtureNetwork::new();
    network
        .on_any(ROOT_1, referral("test", &[("a.nic.test", Some(TLD_TEST))]))
        .on_any(ROOT_2, referral("test", &[("a.nic.test", Some(TLD_TEST))]))
        .on_any(
            TLD_TEST,
            referral("example.test", &[("ns1.example.test", Some(AUTH_1))]),
        )
        .on(
            AUTH_1,
            "www.example.test",
            RecordType::A,
            authoritative(vec![a_record("www.example.test", "192.0.2.80")]),
        );
    network
}
