use rootwalk_application::services::IterativeResolver;
use rootwalk_application::use_cases::LookupHostUseCase;
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::{HickoryCodec, UdpTransport};
use std::sync::Arc;

/// One engine, and so one cache and query counter, for the whole run.
pub struct DnsServices {
    pub resolver: Arc<IterativeResolver>,
    pub host_lookup: LookupHostUseCase,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let resolver = Arc::new(IterativeResolver::new(
            &config.resolver,
            Arc::new(UdpTransport::new()),
            Arc::new(HickoryCodec::new()),
        ));
        let host_lookup = LookupHostUseCase::new(Arc::clone(&resolver));

        Self {
            resolver,
            host_lookup,
        }
    }
}
