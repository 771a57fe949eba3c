//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default dictionary API the gateway forwards lookups to.
pub const DEFAULT_UPSTREAM_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en_US";

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream dictionary API settings.
    pub upstream: UpstreamConfig,

    /// Static document served at `/`.
    pub static_files: StaticConfig,

    /// Server-side timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Upstream dictionary API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL; the encoded word is appended as the last path segment.
    pub base_url: String,

    /// Deadline for receiving response headers, in milliseconds.
    pub timeout_ms: u64,

    /// User-Agent sent with every upstream request.
    pub user_agent: String,
}

impl UpstreamConfig {
    /// Lookup deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE.to_string(),
            timeout_ms: 5_000,
            user_agent: concat!("dictionary-gateway/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Static document configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Path of the HTML document served at `/`.
    pub index_path: String,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            index_path: "html/index.html".to_string(),
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.upstream.base_url, DEFAULT_UPSTREAM_BASE);
        assert_eq!(config.upstream.timeout(), Duration::from_secs(5));
        assert_eq!(config.static_files.index_path, "html/index.html");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [upstream]
            timeout_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.upstream.timeout_ms, 250);
        assert_eq!(config.upstream.base_url, DEFAULT_UPSTREAM_BASE);
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
