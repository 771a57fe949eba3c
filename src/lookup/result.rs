//! Gateway-facing classification of a lookup.

/// The single classified result of one lookup; the only input to rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// The upstream knew the word.
    Success { word: String, definition: String },
    /// The upstream answered 404.
    NotFound,
    /// No response headers before the deadline.
    UpstreamTimeout,
    /// Transport failure (code 500) or an unexpected upstream status.
    UpstreamError { code: u16 },
    /// A 2xx response whose body was not the expected JSON shape.
    MalformedPayload,
}

impl LookupResult {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupResult::Success { .. } => "success",
            LookupResult::NotFound => "not_found",
            LookupResult::UpstreamTimeout => "upstream_timeout",
            LookupResult::UpstreamError { .. } => "upstream_error",
            LookupResult::MalformedPayload => "malformed_payload",
        }
    }
}
