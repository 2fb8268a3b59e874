use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

/// Sends one raw DNS datagram to one server and waits for one reply.
///
/// Implementations must give up after `timeout` with
/// [`DomainError::QueryTimeout`]; the resolver never retries.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
