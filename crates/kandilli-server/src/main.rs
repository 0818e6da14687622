//! Kandilli feed server
//!
//! Serves the Kandilli Observatory recent-events listing as a read-only
//! JSON API. Every request re-fetches the upstream page; there is no
//! persistence and no cache.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kandilli_ingest::{KandilliClient, DEFAULT_UPSTREAM_URL};

mod api;
mod filter;

use api::{build_router, ApiState};

#[derive(Parser, Debug)]
#[command(
    name = "kandilli-server",
    about = "Read-only HTTP API over the Kandilli Observatory event listing",
    version
)]
struct Cli {
    /// Port for the HTTP API
    #[arg(short = 'p', long, env = "KANDILLI_PORT", default_value = "3000")]
    port: u16,

    /// Bind address
    #[arg(short = 'b', long, env = "KANDILLI_BIND_ADDR", default_value = "0.0.0.0")]
    bind_addr: String,

    /// Upstream listing URL
    #[arg(long, env = "KANDILLI_UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    upstream_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "KANDILLI_FETCH_TIMEOUT_SECS", default_value = "30")]
    fetch_timeout_secs: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = KandilliClient::new(
        &cli.upstream_url,
        Duration::from_secs(cli.fetch_timeout_secs),
    )?;
    let state = ApiState {
        source: Arc::new(client),
    };

    let addr: SocketAddr = format!("{}:{}", cli.bind_addr, cli.port).parse()?;
    let app = build_router(state);

    info!("Starting Kandilli feed API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
