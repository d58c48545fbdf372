//! Echo Server
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request           ┌──────────────────────────────────────────────┐
//!     ─────────────────────────┼─▶ http::server ──▶ echo::process            │
//!                              │   (axum + tower-http)   decode/inspect/mutate│
//!     Client Response          │                              │               │
//!     ◀────────────────────────┼── http::response ◀──────────┘               │
//!                              │        │                                     │
//!                              │        ▼                                     │
//!                              │   observability::metrics ──▶ /metrics scrape │
//!                              └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use echo_server::config::{load_config, ServiceConfig};
use echo_server::lifecycle::{wait_for_shutdown, Shutdown};
use echo_server::observability::{logging, metrics};
use echo_server::HttpServer;

#[derive(Parser)]
#[command(name = "echo-server", version)]
#[command(about = "JSON echo service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Built-in defaults are used if omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!("echo-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        path = %config.echo.path,
        max_body_bytes = config.echo.max_body_bytes,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_shutdown().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
