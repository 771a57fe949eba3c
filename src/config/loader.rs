//! Configuration loading from disk and environment.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that overrides the listener port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid PORT value '{0}'")]
    Port(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, apply the `PORT`
/// override from the environment, then validate.
pub fn load(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let port = std::env::var(PORT_ENV).ok();
    load_with_port(path, port.as_deref())
}

fn load_with_port(path: Option<&Path>, port: Option<&str>) -> Result<GatewayConfig, ConfigError> {
    let config = match path {
        Some(path) => parse_file(path)?,
        None => GatewayConfig::default(),
    };

    let config = apply_port_override(config, port)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn parse_file(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Replace the listener port with `port`, keeping the configured host.
///
/// A blank value is treated as unset.
pub fn apply_port_override(
    mut config: GatewayConfig,
    port: Option<&str>,
) -> Result<GatewayConfig, ConfigError> {
    let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(config);
    };

    let port: u16 = raw.parse().map_err(|_| ConfigError::Port(raw.to_string()))?;
    let mut addr: SocketAddr = config.listener.bind_address.parse().map_err(|_| {
        ConfigError::Validation(vec![ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        )])
    })?;
    addr.set_port(port);
    config.listener.bind_address = addr.to_string();

    Ok(config)
}
