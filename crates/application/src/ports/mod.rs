mod upstream_forwarder;
mod zone_source;

pub use upstream_forwarder::UpstreamForwarder;
pub use zone_source::ZoneSource;

// Re-export for convenience
pub use simsam_dns_domain::DnsQuery;
