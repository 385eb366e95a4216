use super::shutdown::wait_for_signal;
use anyhow::Context;
use simsam_dns_domain::config::ServerConfig;
use simsam_dns_infrastructure::dns::{DnsServerHandler, UdpDnsServer};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;
use tracing::{info, warn};

/// Serves DNS over UDP until a termination signal arrives.
///
/// On SIGINT/SIGTERM in-flight requests get `shutdown_timeout_secs` to
/// finish, then the function returns an error so the process exits non-zero.
pub async fn run_dns_server(config: &ServerConfig, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr = SocketAddr::from_str(&config.listen_addr())
        .with_context(|| format!("Invalid listen address {}", config.listen_addr()))?;

    let udp_socket = UdpSocket::bind(socket_addr)
        .await
        .with_context(|| format!("Failed to bind UDP socket on {}", socket_addr))?;

    let mut server = UdpDnsServer::new(udp_socket, handler);

    info!(bind_address = %socket_addr, protocol = "UDP", "DNS server listening");

    let (signal_tx, signal_rx) = oneshot::channel();
    let signal_task = tokio::spawn(async move {
        let result = wait_for_signal().await;
        let _ = signal_tx.send(());
        result
    });

    server
        .serve(async {
            let _ = signal_rx.await;
        })
        .await;

    let signal = signal_task
        .await
        .context("Signal listener panicked")?
        .context("Failed to listen for termination signals")?;

    warn!(
        signal = signal,
        in_flight = server.in_flight(),
        "Shutting down DNS server"
    );

    let grace = Duration::from_secs(config.shutdown_timeout_secs);
    if server.shutdown(grace).await {
        info!("DNS server shut down cleanly");
    } else {
        warn!(
            timeout_secs = config.shutdown_timeout_secs,
            "Graceful shutdown timed out, abandoning in-flight requests"
        );
    }

    anyhow::bail!("Terminated by {}", signal)
}
