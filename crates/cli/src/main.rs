use clap::Parser;
use gateway_dns_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "gateway-dns")]
#[command(version = "0.1.0")]
#[command(about = "Gateway DNS - authoritative answers for a zone's nameserver identity")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Zone to serve (repeatable, replaces the configured list)
    #[arg(short = 'z', long = "zone", value_name = "ZONE")]
    zones: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        zones: cli.zones.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Gateway DNS Server v{}", env!("CARGO_PKG_VERSION"));

    let services = di::GatewayServices::new(&config)?;

    server::start_dns_server(
        config.server.socket_address(),
        services.handler,
        config.server.udp_workers,
        config.server.tcp_idle_timeout(),
    )
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
