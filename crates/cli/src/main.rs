//! # Simsam DNS
//!
//! Authoritative DNS server for a single zone file, forwarding everything
//! else to one upstream resolver.

use clap::Parser;
use simsam_dns_domain::{CliOverrides, Config};
use simsam_dns_infrastructure::dns::DnsServerHandler;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser, Debug)]
#[command(name = "simsam-dns")]
#[command(version)]
#[command(about = "Simsam DNS - authoritative zone server with upstream forwarding")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Zone file to serve
    #[arg(short = 'z', long, value_name = "FILE")]
    zone_file: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Upstream resolver (ip:port); empty disables forwarding
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dns_port: self.port,
            bind_address: self.bind.clone(),
            zone_file: self.zone_file.clone(),
            upstream_server: self.server.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting Simsam DNS v{}", env!("CARGO_PKG_VERSION"));
    let config_file = cli.config.clone().or_else(Config::get_config_path);
    info!(
        config_file = config_file.as_deref().unwrap_or("default"),
        dns_port = config.server.dns_port,
        bind = %config.server.bind_address,
        zone = %config.zone.path,
        forwarding = config.forwarding_enabled(),
        "Configuration loaded"
    );

    let dns_services = di::DnsServices::new(&config)?;
    let handler = DnsServerHandler::new(dns_services.handler_use_case);

    server::run_dns_server(&config.server, handler).await
}
