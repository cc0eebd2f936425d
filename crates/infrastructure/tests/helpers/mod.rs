#![allow(dead_code)]

use async_trait::async_trait;
use gateway_dns_application::ports::ResponseWriter;
use gateway_dns_application::services::ZoneAuthority;
use gateway_dns_application::use_cases::HandleGatewayQueryUseCase;
use gateway_dns_domain::{DomainError, GatewayConfig};
use gateway_dns_infrastructure::dns::{GatewayRequestHandler, StaticAddressSource};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use hickory_server::ServerFuture;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::time::timeout;

pub const ZONE: &str = "example.org.";
pub const QUERY_ID: u16 = 0x5151;
const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

pub fn client() -> SocketAddr {
    SocketAddr::from(([198, 51, 100, 7], 41000))
}

pub fn gateway_config(addresses: &[&str]) -> GatewayConfig {
    GatewayConfig {
        zones: vec![ZONE.to_string()],
        external_addresses: addresses.iter().map(|a| a.to_string()).collect(),
        ..GatewayConfig::default()
    }
}

pub fn handler(addresses: &[&str]) -> GatewayRequestHandler {
    let config = gateway_config(addresses);
    let zone = ZoneAuthority::new(ZONE, &config).unwrap();
    let source = StaticAddressSource::from_config(&config).unwrap();
    let use_case = HandleGatewayQueryUseCase::new(vec![zone], Arc::new(source));
    GatewayRequestHandler::new(Arc::new(use_case))
}

pub fn addresses(values: &[&str]) -> Vec<IpAddr> {
    values.iter().map(|v| IpAddr::from_str(v).unwrap()).collect()
}

pub fn query(qname: &str, record_type: RecordType) -> Message {
    let mut message = Message::new(QUERY_ID, MessageType::Query, OpCode::Query);
    message.add_query(Query::query(Name::from_str(qname).unwrap(), record_type));
    message
}

/// A gateway listening on loopback UDP and TCP. Dropping it stops both.
pub struct RunningServer {
    pub udp: SocketAddr,
    pub tcp: SocketAddr,
    _server: ServerFuture<GatewayRequestHandler>,
}

pub async fn spawn_server(addresses: &[&str]) -> RunningServer {
    let udp_socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let tcp_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let udp = udp_socket.local_addr().unwrap();
    let tcp = tcp_listener.local_addr().unwrap();

    let mut server = ServerFuture::new(handler(addresses));
    server.register_socket(udp_socket);
    server.register_listener(tcp_listener, REPLY_TIMEOUT);

    RunningServer {
        udp,
        tcp,
        _server: server,
    }
}

pub async fn udp_exchange(server: SocketAddr, request: &Message) -> Message {
    udp_exchange_raw(server, &request.to_bytes().unwrap()).await
}

pub async fn udp_exchange_raw(server: SocketAddr, bytes: &[u8]) -> Message {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.send_to(bytes, server).await.unwrap();

    let mut buf = vec![0u8; 4096];
    let (len, _) = timeout(REPLY_TIMEOUT, socket.recv_from(&mut buf))
        .await
        .expect("no UDP reply")
        .unwrap();
    Message::from_vec(&buf[..len]).unwrap()
}

/// Sends one length-prefixed message on `stream` and reads one back.
pub async fn tcp_exchange(stream: &mut TcpStream, request: &Message) -> Message {
    let bytes = request.to_bytes().unwrap();
    let mut frame = (bytes.len() as u16).to_be_bytes().to_vec();
    frame.extend_from_slice(&bytes);
    stream.write_all(&frame).await.unwrap();

    let mut len = [0u8; 2];
    timeout(REPLY_TIMEOUT, stream.read_exact(&mut len))
        .await
        .expect("no TCP reply")
        .unwrap();
    let mut body = vec![0u8; u16::from_be_bytes(len) as usize];
    stream.read_exact(&mut body).await.unwrap();
    Message::from_vec(&body).unwrap()
}

#[derive(Default)]
pub struct CapturingWriter {
    messages: Mutex<Vec<Message>>,
}

impl CapturingWriter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
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
impl ResponseWriter for CapturingWriter {
    async fn write_message(&self, message: &Message) -> Result<(), DomainError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}
