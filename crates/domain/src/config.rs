pub mod errors;
pub mod gateway;
pub mod logging;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use gateway::GatewayConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
