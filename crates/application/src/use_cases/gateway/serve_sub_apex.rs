use super::ResponseKind;
use crate::ports::ExternalAddressSource;
use crate::query_context::QueryContext;
use gateway_dns_domain::SubApexName;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::RecordType;
use std::sync::Arc;
use tracing::debug;

/// Answers questions under `<apex>.<zone>`, where only `ns1` holds data.
pub struct ServeSubApexUseCase {
    addresses: Arc<dyn ExternalAddressSource>,
}

impl ServeSubApexUseCase {
    pub fn new(addresses: Arc<dyn ExternalAddressSource>) -> Self {
        Self { addresses }
    }

    pub async fn execute(&self, context: &QueryContext<'_>) -> ResponseKind {
        let zone = context.zone();
        let mut reply = context.new_reply();

        let kind = match SubApexName::classify(context.relative_labels()) {
            name if name.is_nameserver() => {
                let owner = context.name().clone();
                let wanted = context.query_type();

                for record in self.addresses.addresses(context) {
                    let record = zone.relabel(&record, owner.clone());
                    if matches_address_type(wanted, record.record_type()) {
                        reply.add_answer(record);
                    }
                }

                if reply.answers().is_empty() {
                    reply.add_name_server(zone.soa());
                    ResponseKind::NoData
                } else {
                    ResponseKind::Answer
                }
            }
            SubApexName::EmptyNonTerminal => {
                reply.add_name_server(zone.soa());
                ResponseKind::NoData
            }
            SubApexName::NsCandidate(_) | SubApexName::Invalid => {
                reply.set_response_code(ResponseCode::NXDomain);
                reply.add_name_server(zone.soa());
                ResponseKind::NxDomain
            }
        };

        debug!(
            domain = %context.name(),
            record_type = %context.query_type(),
            outcome = kind.as_str(),
            "Sub-apex query answered"
        );

        context.send(reply).await;
        kind
    }
}

fn matches_address_type(wanted: RecordType, have: RecordType) -> bool {
    match wanted {
        RecordType::A | RecordType::AAAA => wanted == have,
        _ => false,
    }
}
