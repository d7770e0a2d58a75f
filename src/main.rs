//! BananoMiner Dashboard Edge Gateway
//!
//! A small edge gateway built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                EDGE GATEWAY                   │
//!                      │                                               │
//!   Browser Request    │  ┌─────────┐    ┌──────────────┐             │
//!   ───────────────────┼─▶│  http   │───▶│   routing    │             │
//!                      │  │ server  │    │  (classify)  │             │
//!                      │  └─────────┘    └──────┬───────┘             │
//!                      │                        │                      │
//!                      │          POST /api     │     anything else    │
//!                      │              ┌─────────┴─────────┐           │
//!                      │              ▼                   ▼           │
//!                      │      ┌──────────────┐    ┌──────────────┐    │
//!                      │      │   upstream   │    │  dashboard   │    │
//!                      │      │ miner client │    │ (static HTML)│    │
//!                      │      └──────┬───────┘    └──────────────┘    │
//!                      │             │                                 │
//!                      └─────────────┼─────────────────────────────────┘
//!                                    ▼
//!                       GET bananominer.com/user_address/{wallet}
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use miner_dashboard::config::validation::validate_config;
use miner_dashboard::config::{load_config, ConfigError, GatewayConfig};
use miner_dashboard::observability::init_tracing;
use miner_dashboard::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "miner-dashboard")]
#[command(about = "Edge gateway for the BananoMiner dashboard", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults apply when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_tracing(&config.observability.log_filter);

    tracing::info!("miner-dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
