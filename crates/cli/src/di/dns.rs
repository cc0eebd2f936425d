use gateway_dns_application::services::ZoneAuthority;
use gateway_dns_application::use_cases::HandleGatewayQueryUseCase;
use gateway_dns_domain::Config;
use gateway_dns_infrastructure::dns::{GatewayRequestHandler, StaticAddressSource};
use std::sync::Arc;
use tracing::{info, warn};

pub struct GatewayServices {
    pub handler: GatewayRequestHandler,
}

impl GatewayServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let zones = Self::build_zones(config)?;
        let addresses = Self::build_address_source(config)?;

        let use_case = Arc::new(HandleGatewayQueryUseCase::new(zones, addresses));
        for zone in use_case.zones() {
            info!(zone = %zone, "Serving zone");
        }

        Ok(Self {
            handler: GatewayRequestHandler::new(use_case),
        })
    }

    fn build_zones(config: &Config) -> anyhow::Result<Vec<ZoneAuthority>> {
        config
            .gateway
            .zones
            .iter()
            .map(|zone| {
                ZoneAuthority::new(zone, &config.gateway)
                    .map_err(|e| anyhow::anyhow!("Zone '{}': {}", zone, e))
            })
            .collect()
    }

    fn build_address_source(config: &Config) -> anyhow::Result<Arc<StaticAddressSource>> {
        let source = StaticAddressSource::from_config(&config.gateway)?;

        if source.is_empty() {
            warn!("No external addresses configured, ns1 queries will get NODATA");
        } else {
            info!(addresses = source.len(), "Loaded external addresses");
        }

        Ok(Arc::new(source))
    }
}
