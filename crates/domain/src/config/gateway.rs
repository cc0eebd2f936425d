use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::errors::ConfigError;

/// Settings for the synthetic zones this server answers for.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Zones served, e.g. `["example.org."]`
    #[serde(default)]
    pub zones: Vec<String>,

    /// Reserved label under each zone holding the nameserver identity
    #[serde(default = "default_apex")]
    pub apex: String,

    /// Mailbox label used for the SOA RNAME
    #[serde(default = "default_hostmaster")]
    pub hostmaster: String,

    /// TTL applied to SOA, NS and nameserver address records
    #[serde(default = "default_ttl_high")]
    pub ttl_high: u32,

    /// Addresses published for `ns1.<apex>.<zone>`
    #[serde(default)]
    pub external_addresses: Vec<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            zones: vec![],
            apex: default_apex(),
            hostmaster: default_hostmaster(),
            ttl_high: default_ttl_high(),
            external_addresses: vec![],
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zones.is_empty() {
            return Err(ConfigError::Validation("No zones configured".to_string()));
        }

        for zone in &self.zones {
            if zone.trim_matches('.').is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Zone '{}' must not be the root zone",
                    zone
                )));
            }
        }

        validate_single_label("apex", &self.apex)?;
        validate_single_label("hostmaster", &self.hostmaster)?;
        self.parsed_addresses()?;

        Ok(())
    }

    /// Parse `external_addresses` into IPs, failing on the first bad entry.
    pub fn parsed_addresses(&self) -> Result<Vec<IpAddr>, ConfigError> {
        self.external_addresses
            .iter()
            .map(|addr| {
                addr.trim().parse::<IpAddr>().map_err(|e| {
                    ConfigError::Validation(format!("Invalid external address '{}': {}", addr, e))
                })
            })
            .collect()
    }
}

fn validate_single_label(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{} must not be empty", field)));
    }
    if value.contains('.') {
        return Err(ConfigError::Validation(format!(
            "{} '{}' must be a single label",
            field, value
        )));
    }
    if value.len() > 63 {
        return Err(ConfigError::Validation(format!(
            "{} '{}' exceeds 63 characters",
            field, value
        )));
    }
    Ok(())
}

fn default_apex() -> String {
    "dns".to_string()
}

fn default_hostmaster() -> String {
    "hostmaster".to_string()
}

fn default_ttl_high() -> u32 {
    60
}
