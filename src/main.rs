//! Dictionary lookup gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │              DICTIONARY GATEWAY              │
//!                         │                                              │
//!   GET /search?word=cat  │  ┌──────────┐   ┌────────────┐               │
//!   ──────────────────────┼─▶│   http   │──▶│  dispatch  │               │
//!                         │  │  server  │   │ (validate) │               │
//!                         │  └──────────┘   └─────┬──────┘               │
//!                         │                       │                      │
//!                         │                       ▼                      │
//!                         │               ┌──────────────┐               │
//!                         │               │   upstream   │───────────────┼──▶ Dictionary
//!                         │               │    client    │◀──────────────┼─── API
//!                         │               └──────┬───────┘               │
//!                         │                      │ UpstreamOutcome       │
//!                         │                      ▼                       │
//!   200/400/404/500/504   │  ┌──────────┐  ┌──────────────┐              │
//!   ◀─────────────────────┼──│ response │◀─│    lookup    │              │
//!                         │  │ (render) │  │ (interpret)  │              │
//!                         │  └──────────┘  └──────────────┘              │
//!                         │                                              │
//!                         │  config · observability · lifecycle          │
//!                         └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use dictionary_gateway::lifecycle::{signals, startup, Shutdown};
use dictionary_gateway::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "dictionary-gateway")]
#[command(about = "HTTP gateway for dictionary word lookups", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = startup::load_config(cli.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!("dictionary-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        upstream_timeout_ms = config.upstream.timeout_ms,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address already checked by validation.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let (server, listener) = startup::prepare(config).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
