use simsam_dns_application::ports::UpstreamForwarder;
use simsam_dns_application::use_cases::{
    HandleDnsRequestUseCase, LoadZoneUseCase, ResolveQueryUseCase,
};
use simsam_dns_domain::Config;
use simsam_dns_infrastructure::dns::UdpForwarder;
use simsam_dns_infrastructure::zone::ZoneFileSource;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsRequestUseCase>,
}

impl DnsServices {
    /// Loads the zone and wires the resolution pipeline. A zone that cannot
    /// be read or parsed is fatal.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut zone_source = ZoneFileSource::new(&config.zone.path);
        if let Some(origin) = &config.zone.origin {
            zone_source = zone_source.with_origin(origin)?;
        }

        let index = Arc::new(LoadZoneUseCase::execute(&zone_source)?);
        let forwarder = Self::build_forwarder(config);

        let resolver = Arc::new(ResolveQueryUseCase::new(index, forwarder));
        let handler_use_case = Arc::new(HandleDnsRequestUseCase::new(resolver));

        Ok(Self { handler_use_case })
    }

    fn build_forwarder(config: &Config) -> Option<Arc<dyn UpstreamForwarder>> {
        let Some(target) = config.upstream_target() else {
            info!("Forwarding disabled, unmatched queries get empty answers");
            return None;
        };

        info!(
            upstream = target,
            timeout_ms = config.upstream.query_timeout_ms,
            "Forwarding unmatched queries"
        );

        Some(Arc::new(UdpForwarder::new(
            target,
            Duration::from_millis(config.upstream.query_timeout_ms),
        )))
    }
}
