use super::ResponseKind;
use crate::ports::ExternalAddressSource;
use crate::query_context::QueryContext;
use hickory_proto::rr::RecordType;
use std::sync::Arc;
use tracing::debug;

/// Answers questions for the zone apex itself.
pub struct ServeApexUseCase {
    addresses: Arc<dyn ExternalAddressSource>,
}

impl ServeApexUseCase {
    pub fn new(addresses: Arc<dyn ExternalAddressSource>) -> Self {
        Self { addresses }
    }

    pub async fn execute(&self, context: &QueryContext<'_>) -> ResponseKind {
        let zone = context.zone();
        let mut reply = context.new_reply();

        let kind = match context.query_type() {
            RecordType::SOA => {
                reply.add_answer(zone.soa());
                // Some resolvers insist on seeing the NS next to the SOA.
                reply.add_name_server(zone.ns());
                ResponseKind::Answer
            }
            RecordType::NS => {
                reply.add_answer(zone.ns());

                let owner = zone.nameserver_under(context.name());
                for record in self.addresses.addresses(context) {
                    reply.add_additional(zone.relabel(&record, owner.clone()));
                }
                ResponseKind::Answer
            }
            _ => {
                reply.add_name_server(zone.soa());
                ResponseKind::NoData
            }
        };

        debug!(
            domain = %context.name(),
            record_type = %context.query_type(),
            outcome = kind.as_str(),
            additionals = reply.additionals().len(),
            "Apex query answered"
        );

        context.send(reply).await;
        kind
    }
}
