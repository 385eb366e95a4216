//! UDP front end: one task per received datagram.

use super::server::DnsServerHandler;
use hickory_proto::op::{Message, MessageType};
use hickory_proto::serialize::binary::BinEncodable;
use simsam_dns_domain::DomainError;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

/// Largest request accepted; anything longer is truncated by the kernel and
/// fails to decode.
const MAX_UDP_REQUEST_SIZE: usize = 4096;

pub struct UdpDnsServer {
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
    tasks: JoinSet<()>,
}

impl UdpDnsServer {
    pub fn new(socket: UdpSocket, handler: DnsServerHandler) -> Self {
        Self {
            socket: Arc::new(socket),
            handler: Arc::new(handler),
            tasks: JoinSet::new(),
        }
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Number of requests still being answered.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Receives and dispatches requests until `shutdown` resolves.
    pub async fn serve<S>(&mut self, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut recv_buf = vec![0u8; MAX_UDP_REQUEST_SIZE];

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                result = self.socket.recv_from(&mut recv_buf) => match result {
                    Ok((len, client)) => self.dispatch(&recv_buf[..len], client),
                    Err(e) => warn!(error = %e, "UDP recv error"),
                },
                Some(joined) = self.tasks.join_next(), if !self.tasks.is_empty() => {
                    if let Err(e) = joined {
                        error!(error = %e, "DNS request task failed");
                    }
                }
            }
        }
    }

    fn dispatch(&mut self, datagram: &[u8], client: SocketAddr) {
        let request = match Message::from_vec(datagram) {
            Ok(message) if message.message_type() == MessageType::Query => message,
            Ok(_) => {
                debug!(client = %client, "Ignoring DNS response sent to server port");
                return;
            }
            Err(e) => {
                debug!(client = %client, error = %e, "Dropping undecodable DNS message");
                return;
            }
        };

        let socket = Arc::clone(&self.socket);
        let handler = Arc::clone(&self.handler);

        self.tasks.spawn(async move {
            let response = handler.handle(&request, client).await;
            if let Err(e) = send_response(&socket, &response, client).await {
                error!(error = %e, client = %client, "Failed to send response");
            }
        });
    }

    /// Waits up to `grace` for in-flight requests, then aborts the rest.
    /// Returns `true` when every request finished in time.
    pub async fn shutdown(mut self, grace: Duration) -> bool {
        let drain = async {
            while let Some(joined) = self.tasks.join_next().await {
                if let Err(e) = joined {
                    error!(error = %e, "DNS request task failed");
                }
            }
        };

        if tokio::time::timeout(grace, drain).await.is_ok() {
            return true;
        }

        self.tasks.abort_all();
        false
    }
}

async fn send_response(
    socket: &UdpSocket,
    response: &Message,
    client: SocketAddr,
) -> Result<(), DomainError> {
    let bytes = response
        .to_vec()
        .map_err(|e| DomainError::Write(format!("encoding reply: {}", e)))?;

    socket
        .send_to(&bytes, client)
        .await
        .map_err(|e| DomainError::Write(e.to_string()))?;

    Ok(())
}
