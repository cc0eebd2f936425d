//! Address source backed by the addresses listed in configuration.

use gateway_dns_application::ports::ExternalAddressSource;
use gateway_dns_application::QueryContext;
use gateway_dns_domain::{DomainError, GatewayConfig};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{Name, RData, Record};
use std::net::IpAddr;
use std::sync::Arc;

/// Publishes a fixed list of addresses for the nameserver.
///
/// Records are built once and shared; every call hands out clones, so
/// callers may relabel them freely.
#[derive(Debug, Clone)]
pub struct StaticAddressSource {
    records: Arc<[Record]>,
}

impl StaticAddressSource {
    pub fn new(addresses: &[IpAddr]) -> Self {
        let records: Vec<Record> = addresses.iter().map(|addr| to_record(*addr)).collect();
        Self {
            records: Arc::from(records),
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self, DomainError> {
        let addresses = config
            .parsed_addresses()
            .map_err(|e| DomainError::InvalidIpAddress(e.to_string()))?;
        Ok(Self::new(&addresses))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ExternalAddressSource for StaticAddressSource {
    fn addresses(&self, _context: &QueryContext<'_>) -> Vec<Record> {
        self.records.to_vec()
    }
}

// Owner and TTL are placeholders; responders overwrite both.
fn to_record(addr: IpAddr) -> Record {
    let rdata = match addr {
        IpAddr::V4(ipv4) => RData::A(A(ipv4)),
        IpAddr::V6(ipv6) => RData::AAAA(AAAA(ipv6)),
    };
    Record::from_rdata(Name::root(), 0, rdata)
}
