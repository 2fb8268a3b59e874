use async_trait::async_trait;
use rootwalk_application::ports::DnsTransport;
use rootwalk_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
pub const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP, one fresh socket per query.
///
/// The timeout bounds the whole exchange, send and receive together.
#[derive(Debug, Clone)]
pub struct UdpTransport {
    max_response_size: usize,
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UdpTransport {
    pub fn new() -> Self {
        Self {
            max_response_size: MAX_UDP_RESPONSE_SIZE,
        }
    }

    /// Override the receive limit; replies above it are `OversizedResponse`.
    pub fn with_max_response_size(mut self, max_response_size: usize) -> Self {
        self.max_response_size = max_response_size;
        self
    }

    async fn exchange(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr).await.map_err(|e| DomainError::Transport {
            server,
            reason: format!("failed to bind UDP socket: {}", e),
        })?;

        let bytes_sent = socket
            .send_to(message_bytes, server)
            .await
            .map_err(|e| DomainError::Transport {
                server,
                reason: format!("failed to send UDP query: {}", e),
            })?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        // One spare byte tells an exactly-full reply from an oversized one.
        let mut recv_buf = vec![0u8; self.max_response_size + 1];

        loop {
            let (bytes_received, from_addr) =
                socket
                    .recv_from(&mut recv_buf)
                    .await
                    .map_err(|e| DomainError::Transport {
                        server,
                        reason: format!("failed to receive UDP response: {}", e),
                    })?;

            // Validate response came from expected server
            if from_addr != server {
                warn!(
                    expected = %server,
                    received_from = %from_addr,
                    "UDP response from unexpected source, ignoring"
                );
                continue;
            }

            if bytes_received > self.max_response_size {
                return Err(DomainError::OversizedResponse {
                    server,
                    size: bytes_received,
                });
            }

            recv_buf.truncate(bytes_received);

            debug!(server = %server, bytes_received = bytes_received, "UDP response received");

            return Ok(recv_buf);
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        tokio::time::timeout(timeout, self.exchange(server, message_bytes))
            .await
            .map_err(|_| DomainError::QueryTimeout { server })?
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
