//! Springfield Hub (server binary)
//!
//! A browser-facing content site over two public Simpsons data providers.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                SPRINGFIELD HUB                │
//!                    │                                               │
//!   Browser GET /    │  ┌────────┐   ┌────────────────────────────┐ │
//!   ─────────────────┼─▶│  http  │──▶│ view (3 sections, paginated│ │
//!                    │  │ server │   │ + curated fallback)        │ │
//!   Browser GET      │  └────────┘   └─────────────┬──────────────┘ │
//!   /api/*           │       │                     │                │
//!   ─────────────────┼───────┼──▶┌─────────────────▼─────────────┐  │
//!                    │       │   │ api (proxy + normalization)   │  │
//!                    │       │   └─────────────────┬─────────────┘  │
//!                    │       │                     │                │
//!                    │       │   ┌─────────────────▼─────────────┐  │     Primary /
//!                    │       │   │ upstream (reqwest JSON client)│──┼───▶ fallback
//!                    │       │   └───────────────────────────────┘  │     providers
//!                    │       │                                      │
//!                    │  ┌────▼──────────────────────────────────┐   │
//!                    │  │ config · observability · lifecycle    │   │
//!                    │  └───────────────────────────────────────┘   │
//!                    └───────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use springfield_hub::config::loader::load_config;
use springfield_hub::lifecycle::signals;
use springfield_hub::observability;
use springfield_hub::{HttpServer, Shutdown, SiteConfig};

/// Springfield Hub server.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };
    if let Some(addr) = args.addr {
        config.listener.bind_address = addr.to_string();
    }

    observability::logging::init(&config.observability.log_level);

    tracing::info!("springfield-hub v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        primary = %config.upstream.primary_base_url,
        fallback = %config.upstream.fallback_base_url,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_exporter(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    signals::trigger_on_ctrl_c(shutdown);

    let server = HttpServer::new(config);
    server.run(listener, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
