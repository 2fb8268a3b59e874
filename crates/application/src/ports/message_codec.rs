use rootwalk_domain::{DnsMessage, DnsQuery, DomainError};
use std::net::SocketAddr;

/// Wire-format request ready to hand to a transport.
#[derive(Debug, Clone)]
pub struct EncodedQuery {
    pub id: u16,
    pub bytes: Vec<u8>,
}

/// Converts between structured messages and wire bytes.
pub trait MessageCodec: Send + Sync {
    fn encode_query(&self, query: &DnsQuery) -> Result<EncodedQuery, DomainError>;

    /// Decode a datagram received from `server`. Truncated or undecodable
    /// input is an error.
    fn decode_response(&self, bytes: &[u8], server: SocketAddr) -> Result<DnsMessage, DomainError>;
}
