pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::ResponseParser;

use rootwalk_application::ports::{EncodedQuery, MessageCodec};
use rootwalk_domain::{DnsMessage, DnsQuery, DomainError};
use std::net::SocketAddr;

/// Standard DNS wire format via `hickory-proto`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryCodec;

impl HickoryCodec {
    pub fn new() -> Self {
        Self
    }
}

impl MessageCodec for HickoryCodec {
    fn encode_query(&self, query: &DnsQuery) -> Result<EncodedQuery, DomainError> {
        let (id, bytes) = MessageBuilder::build_query(query)?;
        Ok(EncodedQuery { id, bytes })
    }

    fn decode_response(&self, bytes: &[u8], server: SocketAddr) -> Result<DnsMessage, DomainError> {
        ResponseParser::parse(bytes, server)
    }
}
