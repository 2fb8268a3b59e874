use crate::dns_record::RecordType;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Query to {server} timed out")]
    QueryTimeout { server: SocketAddr },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: SocketAddr, reason: String },

    #[error("Malformed DNS response: {0}")]
    MalformedResponse(String),

    #[error("Truncated DNS response from {server}")]
    TruncatedResponse { server: SocketAddr },

    #[error("Oversized DNS response from {server} ({size} bytes)")]
    OversizedResponse { server: SocketAddr, size: usize },

    #[error("Resolution loop detected for {name} {record_type} (depth {depth})")]
    ResolutionLoop {
        name: String,
        record_type: RecordType,
        depth: usize,
    },

    #[error("No root servers configured")]
    NoRootServers,
}

impl DomainError {
    /// Errors raised by the network path rather than by message content.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::QueryTimeout { .. }
                | DomainError::Transport { .. }
                | DomainError::OversizedResponse { .. }
        )
    }

    /// Errors raised while decoding or validating a received message.
    pub fn is_codec_error(&self) -> bool {
        matches!(
            self,
            DomainError::MalformedResponse(_) | DomainError::TruncatedResponse { .. }
        )
    }
}
