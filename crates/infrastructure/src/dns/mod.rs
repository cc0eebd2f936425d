pub mod address_source;
pub mod response_handle;
pub mod server;

pub use address_source::StaticAddressSource;
pub use response_handle::ResponseHandleWriter;
pub use server::GatewayRequestHandler;
