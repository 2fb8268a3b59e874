use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::Message;
use hickory_proto::rr::{Name, RData, Record};
use rootwalk_domain::{
    DnsMessage, DnsQuery, DomainError, DomainName, ResourceRecord, ResponseCode,
};
use std::net::SocketAddr;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decode a response datagram received from `server`.
    ///
    /// A set TC bit is reported as `TruncatedResponse`; there is no TCP
    /// fallback. Any decoding failure is `MalformedResponse`.
    pub fn parse(response_bytes: &[u8], server: SocketAddr) -> Result<DnsMessage, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::MalformedResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.truncated() {
            return Err(DomainError::TruncatedResponse { server });
        }

        let question = match message.queries().first() {
            Some(query) => Some(DnsQuery::new(
                Self::convert_name(query.name())?,
                RecordTypeMapper::from_hickory(query.query_type()),
            )),
            None => None,
        };

        let answers = Self::convert_section(message.answers())?;
        let authority = Self::convert_section(message.name_servers())?;
        let additional = Self::convert_section(message.additionals())?;
        let response_code = ResponseCode::from_u16(u16::from(message.response_code()));

        debug!(
            rcode = %response_code,
            authoritative = message.authoritative(),
            answers = answers.len(),
            authority = authority.len(),
            additional = additional.len(),
            "DNS response parsed"
        );

        Ok(DnsMessage {
            id: message.id(),
            question,
            answers,
            authority,
            additional,
            response_code,
            authoritative: message.authoritative(),
        })
    }

    fn convert_section(records: &[Record]) -> Result<Vec<ResourceRecord>, DomainError> {
        records.iter().map(Self::convert_record).collect()
    }

    fn convert_record(record: &Record) -> Result<ResourceRecord, DomainError> {
        let name = Self::convert_name(record.name())?;
        let ttl = record.ttl();

        let converted = match record.data() {
            RData::A(a) => ResourceRecord::a(name, ttl, a.0),
            RData::AAAA(aaaa) => ResourceRecord::aaaa(name, ttl, aaaa.0),
            RData::CNAME(canonical) => {
                ResourceRecord::cname(name, ttl, Self::convert_name(&canonical.0)?)
            }
            RData::NS(ns) => ResourceRecord::ns(name, ttl, Self::convert_name(&ns.0)?),
            RData::MX(mx) => ResourceRecord::mx(
                name,
                ttl,
                mx.preference(),
                Self::convert_name(mx.exchange())?,
            ),
            other => ResourceRecord::other(
                name,
                RecordTypeMapper::from_hickory(record.record_type()),
                ttl,
                other.to_string(),
            ),
        };

        Ok(converted)
    }

    fn convert_name(name: &Name) -> Result<DomainName, DomainError> {
        name.to_ascii()
            .parse()
            .map_err(|e: DomainError| DomainError::MalformedResponse(e.to_string()))
    }
}
