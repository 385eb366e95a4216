//! Simsam DNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod lookup_key;
pub mod response_status;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use lookup_key::LookupKey;
pub use response_status::ResponseStatus;
