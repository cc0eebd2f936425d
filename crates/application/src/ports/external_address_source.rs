use crate::query_context::QueryContext;
use hickory_proto::rr::Record;

/// Source of the addresses published for the zone's nameserver.
///
/// Returned records may carry any owner name and TTL; callers relabel copies
/// before putting them on the wire.
pub trait ExternalAddressSource: Send + Sync {
    fn addresses(&self, context: &QueryContext<'_>) -> Vec<Record>;
}
