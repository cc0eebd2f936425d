use gateway_dns_domain::{DomainError, GatewayConfig, SoaTimers, NAMESERVER_LABEL};
use hickory_proto::rr::rdata::{NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use tracing::warn;

/// SOA and NS data for one served zone.
///
/// Every derived name is built when the zone is loaded, so handing out
/// records per query cannot fail.
#[derive(Debug, Clone)]
pub struct ZoneAuthority {
    zone: Name,
    /// `<apex>.<zone>`, root of the nameserver identity names
    sub_apex: Name,
    /// `ns1.<apex>.<zone>`
    nameserver: Name,
    /// `<hostmaster>.<apex>.<zone>`
    mailbox: Name,
    /// `ns1.<apex>`, joined onto a query name for NS additionals
    nameserver_prefix: Name,
    ttl_high: u32,
    timers: SoaTimers,
}

impl ZoneAuthority {
    pub fn new(zone: &str, config: &GatewayConfig) -> Result<Self, DomainError> {
        let zone = parse_zone(zone)?;
        let apex = config.apex.as_str();

        let sub_apex = join(&[apex], &zone)?;
        let nameserver = join(&[NAMESERVER_LABEL, apex], &zone)?;
        let mailbox = join(&[config.hostmaster.as_str(), apex], &zone)?;
        let nameserver_prefix = Name::from_labels([NAMESERVER_LABEL, apex]).map_err(|e| {
            DomainError::InvalidDomainName(format!("{}.{}: {}", NAMESERVER_LABEL, apex, e))
        })?;

        Ok(Self {
            zone,
            sub_apex,
            nameserver,
            mailbox,
            nameserver_prefix,
            ttl_high: config.ttl_high,
            timers: SoaTimers::default(),
        })
    }

    pub fn zone(&self) -> &Name {
        &self.zone
    }

    pub fn sub_apex(&self) -> &Name {
        &self.sub_apex
    }

    pub fn nameserver(&self) -> &Name {
        &self.nameserver
    }

    pub fn mailbox(&self) -> &Name {
        &self.mailbox
    }

    pub fn ttl_high(&self) -> u32 {
        self.ttl_high
    }

    pub fn soa(&self) -> Record {
        let soa = SOA::new(
            self.nameserver.clone(),
            self.mailbox.clone(),
            self.timers.serial,
            self.timers.refresh,
            self.timers.retry,
            self.timers.expire,
            self.ttl_high,
        );
        Record::from_rdata(self.zone.clone(), self.ttl_high, RData::SOA(soa))
    }

    pub fn ns(&self) -> Record {
        Record::from_rdata(
            self.zone.clone(),
            self.ttl_high,
            RData::NS(NS(self.nameserver.clone())),
        )
    }

    /// `ns1.<apex>.<origin>`, keeping the spelling of `origin`.
    pub fn nameserver_under(&self, origin: &Name) -> Name {
        match self.nameserver_prefix.clone().append_domain(origin) {
            Ok(name) => name,
            Err(e) => {
                warn!(error = %e, origin = %origin, "Cannot join nameserver name, using zone spelling");
                self.nameserver.clone()
            }
        }
    }

    /// Fresh copy of `record` owned by `owner` with the high TTL.
    pub fn relabel(&self, record: &Record, owner: Name) -> Record {
        Record::from_rdata(owner, self.ttl_high, record.data().clone())
    }
}

fn parse_zone(zone: &str) -> Result<Name, DomainError> {
    let fqdn = format!("{}.", zone.trim_end_matches('.'));
    Name::from_ascii(&fqdn)
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid zone '{}': {}", zone, e)))
}

fn join(labels: &[&str], zone: &Name) -> Result<Name, DomainError> {
    Name::from_labels(labels.iter().copied())
        .and_then(|prefix| prefix.append_domain(zone))
        .map_err(|e| {
            DomainError::InvalidDomainName(format!(
                "Cannot build {}.{}: {}",
                labels.join("."),
                zone,
                e
            ))
        })
}
