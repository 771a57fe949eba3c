//! Startup orchestration.
//!
//! Order: load config → validate → build upstream client → bind listener.
//! Any failure here is fatal; nothing after startup is.

use std::path::Path;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{loader, ConfigError, GatewayConfig};
use crate::http::HttpServer;
use crate::upstream::UpstreamError;

/// Fatal startup failure.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("upstream client error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Load and validate configuration, honouring the `PORT` override.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, StartupError> {
    Ok(loader::load(path)?)
}

/// Build the server and bind its listener.
pub async fn prepare(config: GatewayConfig) -> Result<(HttpServer, TcpListener), StartupError> {
    let address = config.listener.bind_address.clone();
    let server = HttpServer::new(config)?;
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    Ok((server, listener))
}
