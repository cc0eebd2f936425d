#![allow(dead_code)]

use async_trait::async_trait;
use gateway_dns_application::ports::{ExternalAddressSource, ResponseWriter};
use gateway_dns_application::services::ZoneAuthority;
use gateway_dns_application::QueryContext;
use gateway_dns_domain::{DomainError, GatewayConfig};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, AAAA, SOA};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const ZONE: &str = "example.org.";
pub const TTL_HIGH: u32 = 3600;
pub const QUERY_ID: u16 = 0x4242;

pub fn client() -> SocketAddr {
    SocketAddr::from(([192, 0, 2, 10], 53000))
}

pub fn gateway_config() -> GatewayConfig {
    GatewayConfig {
        zones: vec![ZONE.to_string()],
        apex: "dns".to_string(),
        hostmaster: "hostmaster".to_string(),
        ttl_high: TTL_HIGH,
        external_addresses: vec![],
    }
}

pub fn zone_authority(zone: &str) -> ZoneAuthority {
    ZoneAuthority::new(zone, &gateway_config()).unwrap()
}

pub fn name(value: &str) -> Name {
    Name::from_str(value).unwrap()
}

pub fn query(qname: &str, record_type: RecordType) -> Message {
    let mut message = Message::new(QUERY_ID, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(Query::query(name(qname), record_type));
    message
}

pub fn a_record(ip: [u8; 4]) -> Record {
    Record::from_rdata(
        name("placeholder.invalid."),
        5,
        RData::A(A(Ipv4Addr::from(ip))),
    )
}

pub fn aaaa_record(ip: &str) -> Record {
    Record::from_rdata(
        name("placeholder.invalid."),
        5,
        RData::AAAA(AAAA(Ipv6Addr::from_str(ip).unwrap())),
    )
}

pub fn context(
    qname: &str,
    record_type: RecordType,
    writer: Arc<dyn ResponseWriter>,
) -> QueryContext<'static> {
    QueryContext::new(
        query(qname, record_type),
        Arc::new(zone_authority(ZONE)),
        client(),
        writer,
    )
    .unwrap()
}

pub fn soa_of(record: &Record) -> &SOA {
    match record.data() {
        RData::SOA(soa) => soa,
        other => panic!("expected SOA, got {:?}", other),
    }
}

pub fn ns_target(record: &Record) -> Name {
    match record.data() {
        RData::NS(ns) => ns.0.clone(),
        other => panic!("expected NS, got {:?}", other),
    }
}

pub struct MockAddressSource {
    records: Vec<Record>,
    calls: AtomicUsize,
}

impl MockAddressSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn dual_stack() -> Self {
        Self::new(vec![a_record([203, 0, 113, 5]), aaaa_record("2001:db8::5")])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl ExternalAddressSource for MockAddressSource {
    fn addresses(&self, _context: &QueryContext<'_>) -> Vec<Record> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records.clone()
    }
}

#[derive(Default)]
pub struct RecordingResponseWriter {
    messages: Mutex<Vec<Message>>,
}

impl RecordingResponseWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }

    pub fn single(&self) -> Message {
        let messages = self.messages();
        assert_eq!(messages.len(), 1, "expected exactly one response");
        messages.into_iter().next().unwrap()
    }
}

#[async_trait]
impl ResponseWriter for RecordingResponseWriter {
    async fn write_message(&self, message: &Message) -> Result<(), DomainError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct FailingResponseWriter {
    attempts: AtomicUsize,
}

impl FailingResponseWriter {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResponseWriter for FailingResponseWriter {
    async fn write_message(&self, _message: &Message) -> Result<(), DomainError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::ResponseWrite {
            peer: "192.0.2.10:53000".to_string(),
            reason: "connection reset".to_string(),
        })
    }
}
