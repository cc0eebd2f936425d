//! Gateway DNS Domain Layer
pub mod config;
pub mod errors;
pub mod soa;
pub mod sub_apex_name;

pub use config::{CliOverrides, Config, ConfigError, GatewayConfig};
pub use errors::DomainError;
pub use soa::SoaTimers;
pub use sub_apex_name::{SubApexName, NAMESERVER_LABEL};
