//! Dictionary lookup gateway library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod lookup;
pub mod observability;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use lookup::LookupResult;
pub use upstream::UpstreamOutcome;
