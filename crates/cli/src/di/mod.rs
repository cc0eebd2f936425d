mod dns;

pub use dns::GatewayServices;
