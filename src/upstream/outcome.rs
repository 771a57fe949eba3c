//! Raw result of a single upstream call.

use bytes::Bytes;
use thiserror::Error;

/// What happened to one outbound lookup. Exactly one is produced per call.
#[derive(Debug)]
pub enum UpstreamOutcome {
    /// Headers arrived before the deadline and the body was read in full.
    Responded { status: u16, body: Bytes },
    /// The deadline elapsed before response headers arrived.
    TimedOut,
    /// The exchange failed at the network level.
    TransportError(UpstreamError),
}

impl UpstreamOutcome {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamOutcome::Responded { .. } => "responded",
            UpstreamOutcome::TimedOut => "timed_out",
            UpstreamOutcome::TransportError(_) => "transport_error",
        }
    }
}

/// Transport-level failure talking to the dictionary API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The lookup URL could not be built.
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    /// Connecting, sending, or receiving headers failed.
    #[error("upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The connection broke while the body was being read.
    #[error("failed to read upstream body: {0}")]
    Body(#[source] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
