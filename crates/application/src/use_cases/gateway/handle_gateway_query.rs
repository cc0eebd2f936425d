use super::{ResponseKind, ServeApexUseCase, ServeSubApexUseCase};
use crate::ports::{ExternalAddressSource, ResponseWriter};
use crate::query_context::QueryContext;
use crate::services::{reply_to, ZoneAuthority};
use gateway_dns_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Name;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error};

/// Routes a question to the apex or sub-apex responder of the zone it
/// belongs to.
pub struct HandleGatewayQueryUseCase {
    zones: Vec<Arc<ZoneAuthority>>,
    apex: ServeApexUseCase,
    sub_apex: ServeSubApexUseCase,
}

impl HandleGatewayQueryUseCase {
    pub fn new(zones: Vec<ZoneAuthority>, addresses: Arc<dyn ExternalAddressSource>) -> Self {
        Self {
            zones: zones.into_iter().map(Arc::new).collect(),
            apex: ServeApexUseCase::new(Arc::clone(&addresses)),
            sub_apex: ServeSubApexUseCase::new(addresses),
        }
    }

    pub fn zones(&self) -> impl Iterator<Item = &Name> {
        self.zones.iter().map(|zone| zone.zone())
    }

    /// Most specific served zone containing `name`.
    pub fn find_zone(&self, name: &Name) -> Option<&Arc<ZoneAuthority>> {
        self.zones
            .iter()
            .filter(|zone| zone.zone().zone_of(name))
            .max_by_key(|zone| zone.zone().iter().count())
    }

    pub async fn execute<'w>(
        &self,
        request: Message,
        client: SocketAddr,
        writer: Arc<dyn ResponseWriter + 'w>,
    ) -> Result<ResponseKind, DomainError> {
        let name = request
            .queries()
            .first()
            .map(|query| query.name().clone())
            .ok_or_else(|| DomainError::MalformedRequest("no question".to_string()))?;

        let zone = match self.find_zone(&name) {
            Some(zone) => Arc::clone(zone),
            None => {
                debug!(domain = %name, client = %client, "Query outside served zones");
                let mut reply = reply_to(&request);
                reply.set_authoritative(false);
                reply.set_response_code(ResponseCode::Refused);
                if let Err(e) = writer.write_message(&reply).await {
                    error!(error = %e, domain = %name, client = %client, "Failed to send a response");
                }
                return Ok(ResponseKind::Refused);
            }
        };

        let context = QueryContext::new(request, zone, client, writer)?;
        let zone = context.zone();

        let kind = if context.name() == zone.zone() {
            self.apex.execute(&context).await
        } else if zone.sub_apex().zone_of(context.name()) {
            self.sub_apex.execute(&context).await
        } else {
            // Only the apex and the nameserver names exist in a gateway zone.
            let mut reply = context.new_reply();
            reply.set_response_code(ResponseCode::NXDomain);
            reply.add_name_server(zone.soa());
            context.send(reply).await;
            ResponseKind::NxDomain
        };

        Ok(kind)
    }
}
