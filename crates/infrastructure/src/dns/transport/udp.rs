use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use simsam_dns_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{lookup_host, UdpSocket};
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport.
///
/// The server is a `host:port` string resolved on every exchange. Each
/// exchange binds its own ephemeral socket and connects it to the server, so
/// datagrams from other sources are filtered by the kernel and an ICMP
/// port-unreachable surfaces as `ConnectionRefused`.
pub struct UdpTransport {
    server: String,
}

impl UdpTransport {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    async fn resolve(&self) -> io::Result<SocketAddr> {
        lookup_host(self.server.as_str()).await?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} resolved to no addresses", self.server),
            )
        })
    }

    fn bind_addr(server_addr: SocketAddr) -> SocketAddr {
        if server_addr.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> io::Result<Vec<u8>> {
        let server_addr = self.resolve().await?;

        let socket = UdpSocket::bind(Self::bind_addr(server_addr)).await?;
        socket.connect(server_addr).await?;

        let bytes_sent = socket.send(message_bytes).await?;
        debug!(server = %server_addr, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = socket.recv(&mut recv_buf).await?;
        recv_buf.truncate(bytes_received);

        debug!(
            server = %server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }

    fn map_io_error(&self, error: io::Error) -> DomainError {
        let server = self.server.clone();
        match error.kind() {
            io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused { server },
            io::ErrorKind::TimedOut => DomainError::TransportTimeout { server },
            _ => DomainError::Transport {
                server,
                reason: error.to_string(),
            },
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bytes = tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server.clone(),
            })?
            .map_err(|e| self.map_io_error(e))?;

        Ok(TransportResponse { bytes })
    }
}
