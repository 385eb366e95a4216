//! Configuration module for Simsam DNS
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listener port, bind address and shutdown budget
//! - `zone`: Zone file location and origin
//! - `upstream`: Forwarding target
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;
pub mod zone;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
pub use zone::ZoneConfig;
