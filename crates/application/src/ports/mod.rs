pub mod dns_transport;
pub mod message_codec;

pub use dns_transport::DnsTransport;
pub use message_codec::{EncodedQuery, MessageCodec};
