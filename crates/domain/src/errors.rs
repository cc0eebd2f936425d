use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Malformed DNS request: {0}")]
    MalformedRequest(String),

    #[error("Failed to serialize DNS message: {0}")]
    Serialization(String),

    #[error("Failed to write response to {peer}: {reason}")]
    ResponseWrite { peer: String, reason: String },

    #[error("I/O error: {0}")]
    IoError(String),
}
