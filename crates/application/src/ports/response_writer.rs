use async_trait::async_trait;
use gateway_dns_domain::DomainError;
use hickory_proto::op::Message;

/// Write side of the transport a query arrived on.
#[async_trait]
pub trait ResponseWriter: Send + Sync {
    async fn write_message(&self, message: &Message) -> Result<(), DomainError>;
}
