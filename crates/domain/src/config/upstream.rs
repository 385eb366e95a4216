use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// `host:port` of the resolver that receives unmatched queries.
    /// An empty string disables forwarding.
    #[serde(default = "default_upstream_server")]
    pub server: String,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn is_enabled(&self) -> bool {
        !self.server.trim().is_empty()
    }

    /// Configured `host:port`, `None` when forwarding is disabled.
    pub fn target(&self) -> Option<&str> {
        if self.is_enabled() {
            Some(self.server.trim())
        } else {
            None
        }
    }

    /// Checks that `target` is an IP socket address or a `host:port` pair.
    /// Host names are resolved when queries are forwarded, not here.
    pub fn check_target(target: &str) -> Result<(), String> {
        if target.parse::<SocketAddr>().is_ok() {
            return Ok(());
        }

        let Some((host, port)) = target.rsplit_once(':') else {
            return Err("expected host:port".to_string());
        };

        if host.is_empty() || host.contains(':') || host.chars().any(char::is_whitespace) {
            return Err(format!("invalid host '{}'", host));
        }

        port.parse::<u16>()
            .map(|_| ())
            .map_err(|e| format!("invalid port '{}': {}", port, e))
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: default_upstream_server(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

fn default_upstream_server() -> String {
    "8.8.8.8:53".to_string()
}

fn default_query_timeout_ms() -> u64 {
    2000
}
