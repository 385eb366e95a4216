use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use super::zone::ZoneConfig;

const LOCAL_CONFIG_PATH: &str = "simsam-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/simsam-dns/config.toml";

/// Main configuration structure for Simsam DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Zone file location
    #[serde(default)]
    pub zone: ZoneConfig,

    /// Upstream resolver used for unmatched queries
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. simsam-dns.toml in current directory
    /// 3. /etc/simsam-dns/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever source won.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let resolved = path.map(str::to_string).or_else(Self::get_config_path);
        let mut config = match resolved {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(zone_file) = overrides.zone_file {
            self.zone.path = zone_file;
        }
        if let Some(upstream) = overrides.upstream_server {
            self.upstream.server = upstream;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.zone.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Zone file path cannot be empty".to_string(),
            ));
        }

        if let Some(origin) = &self.zone.origin {
            if origin.trim().is_empty() || origin.chars().any(char::is_whitespace) {
                return Err(ConfigError::Validation(format!(
                    "Invalid zone origin '{}'",
                    origin
                )));
            }
        }

        if let Some(target) = self.upstream.target() {
            UpstreamConfig::check_target(target).map_err(|e| {
                ConfigError::Validation(format!("Invalid upstream server '{}': {}", target, e))
            })?;
        }

        if self.upstream.is_enabled() && self.upstream.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream query timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn forwarding_enabled(&self) -> bool {
        self.upstream.is_enabled()
    }

    /// Upstream `host:port`, `None` when forwarding is disabled.
    pub fn upstream_target(&self) -> Option<&str> {
        self.upstream.target()
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub zone_file: Option<String>,
    pub upstream_server: Option<String>,
    pub log_level: Option<String>,
}
