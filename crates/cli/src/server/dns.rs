use gateway_dns_infrastructure::dns::GatewayRequestHandler;
use hickory_server::ServerFuture;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinSet;
use tracing::{error, info};

pub async fn start_dns_server(
    bind_addr: String,
    handler: GatewayRequestHandler,
    num_workers: usize,
    tcp_idle_timeout: Duration,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    // Several sockets on one port need SO_REUSEPORT.
    let num_workers = if cfg!(unix) { num_workers } else { 1 };

    info!(bind_address = %socket_addr, num_workers, "Starting DNS server with SO_REUSEPORT");

    let mut join_set: JoinSet<()> = JoinSet::new();

    for i in 0..num_workers {
        let udp_socket = create_udp_socket(domain, socket_addr)?;
        let tcp_listener = create_tcp_listener(domain, socket_addr)?;
        let handler = handler.clone();
        join_set.spawn(async move {
            let mut server = ServerFuture::new(handler);
            server.register_socket(udp_socket);
            server.register_listener(tcp_listener, tcp_idle_timeout);
            if let Err(e) = server.block_until_done().await {
                error!(worker = i, error = %e, "DNS worker error");
            }
        });
    }

    info!("DNS server ready: {} workers on {}", num_workers, socket_addr);

    while join_set.join_next().await.is_some() {}
    Ok(())
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
