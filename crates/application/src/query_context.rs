use crate::ports::ResponseWriter;
use crate::services::{reply_to, ZoneAuthority};
use gateway_dns_domain::DomainError;
use hickory_proto::op::Message;
use hickory_proto::rr::{Name, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::error;

/// Everything needed to answer one question: the request it came in, the
/// zone it matched, and where the answer goes.
///
/// The writer may borrow from the transport's request, hence `'w`.
pub struct QueryContext<'w> {
    request: Message,
    name: Name,
    query_type: RecordType,
    zone: Arc<ZoneAuthority>,
    client: SocketAddr,
    writer: Arc<dyn ResponseWriter + 'w>,
}

impl<'w> QueryContext<'w> {
    pub fn new(
        request: Message,
        zone: Arc<ZoneAuthority>,
        client: SocketAddr,
        writer: Arc<dyn ResponseWriter + 'w>,
    ) -> Result<Self, DomainError> {
        let query = request
            .queries()
            .first()
            .ok_or_else(|| DomainError::MalformedRequest("no question".to_string()))?;
        let name = query.name().clone();
        let query_type = query.query_type();

        Ok(Self {
            request,
            name,
            query_type,
            zone,
            client,
            writer,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn query_type(&self) -> RecordType {
        self.query_type
    }

    pub fn zone(&self) -> &ZoneAuthority {
        &self.zone
    }

    pub fn client(&self) -> SocketAddr {
        self.client
    }

    pub fn request(&self) -> &Message {
        &self.request
    }

    /// Labels of the question name above the zone, leftmost first, e.g.
    /// `[ns1, dns]`. Labels are raw bytes and are never re-split.
    pub fn relative_labels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let total = self.name.iter().len();
        let zone_labels = self.zone.zone().iter().len();

        self.name.iter().take(total.saturating_sub(zone_labels))
    }

    pub fn new_reply(&self) -> Message {
        reply_to(&self.request)
    }

    /// Hand the reply to the transport. A failed write is logged and dropped;
    /// the client will retry or time out.
    pub async fn send(&self, reply: Message) {
        if let Err(e) = self.writer.write_message(&reply).await {
            error!(
                error = %e,
                domain = %self.name,
                client = %self.client,
                "Failed to send a response"
            );
        }
    }
}
