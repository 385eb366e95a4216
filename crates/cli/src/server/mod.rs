pub mod dns;
pub mod shutdown;

pub use dns::run_dns_server;
