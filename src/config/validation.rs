//! Configuration validation.
//!
//! Serde handles syntax; this module checks the values make sense together.
//! Every problem is reported, not just the first one.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("upstream.base_url '{0}' is not a valid URL")]
    UpstreamUrl(String),

    #[error("upstream.base_url must use http or https, got '{0}'")]
    UpstreamScheme(String),

    #[error("upstream.timeout_ms must be greater than zero")]
    ZeroUpstreamTimeout,

    #[error("timeouts.request_secs ({request_ms}ms) must exceed upstream.timeout_ms ({upstream_ms}ms)")]
    RequestTimeoutTooShort { request_ms: u64, upstream_ms: u64 },

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            errors.push(ValidationError::UpstreamScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(_) => errors.push(ValidationError::UpstreamUrl(config.upstream.base_url.clone())),
    }

    if config.upstream.timeout_ms == 0 {
        errors.push(ValidationError::ZeroUpstreamTimeout);
    }

    // The server-side guard has to outlast the upstream deadline.
    let request_ms = config.timeouts.request_secs.saturating_mul(1000);
    if request_ms <= config.upstream.timeout_ms {
        errors.push(ValidationError::RequestTimeoutTooShort {
            request_ms,
            upstream_ms: config.upstream.timeout_ms,
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
