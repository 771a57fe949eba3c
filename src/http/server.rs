//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Serve the static index document
//! - Dispatch `/search` requests to the lookup flow

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{any, get_service},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeFile,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::dispatch::{not_found, search, Dispatcher};
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::upstream::{DictionaryUpstream, UpstreamClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server backed by the real dictionary API client.
    pub fn new(config: GatewayConfig) -> Result<Self, UpstreamError> {
        let client = UpstreamClient::new(&config.upstream)?;
        tracing::info!(
            base_url = %client.base_url(),
            timeout_ms = config.upstream.timeout_ms,
            "Upstream client ready"
        );
        Ok(Self::with_upstream(config, Arc::new(client)))
    }

    /// Create a server around any upstream implementation.
    pub fn with_upstream(config: GatewayConfig, upstream: Arc<dyn DictionaryUpstream>) -> Self {
        let state = AppState {
            dispatcher: Dispatcher::new(upstream, config.upstream.timeout()),
        };

        Self {
            router: Self::build_router(&config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/",
                get_service(ServeFile::new(&config.static_files.index_path)),
            )
            .route("/search", any(search))
            .fallback(not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// Router with all layers applied, for driving the server in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
