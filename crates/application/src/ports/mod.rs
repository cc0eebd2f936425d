mod external_address_source;
mod response_writer;

pub use external_address_source::ExternalAddressSource;
pub use response_writer::ResponseWriter;
