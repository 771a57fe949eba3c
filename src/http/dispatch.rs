//! Search request dispatch.
//!
//! Each `/search` request walks the same phases exactly once:
//!
//! ```text
//! Received ──(word missing/blank)──────────────────────────┐
//!    │                                                     ▼
//! Validated → AwaitingUpstream → interpret → Rendering → Done
//! ```
//!
//! Rendering consumes the [`Reply`], so a request cannot be answered twice.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{RawQuery, State};
use axum::http::HeaderMap;
use thiserror::Error;
use tracing::Instrument;

use crate::http::request::request_id;
use crate::http::response::Reply;
use crate::http::server::AppState;
use crate::lookup::interpret;
use crate::observability::metrics;
use crate::upstream::DictionaryUpstream;

/// Why an inbound request carried no usable word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("missing 'word' parameter")]
    Missing,
    #[error("'word' parameter is blank")]
    Blank,
}

/// A validated lookup: `word` is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    word: String,
}

impl LookupRequest {
    /// Parse the raw query string. The first `word` parameter wins.
    pub fn from_query(query: Option<&str>) -> Result<Self, InputError> {
        let raw = url::form_urlencoded::parse(query.unwrap_or_default().as_bytes())
            .find(|(key, _)| key == "word")
            .map(|(_, value)| value)
            .ok_or(InputError::Missing)?;

        let word = raw.trim();
        if word.is_empty() {
            return Err(InputError::Blank);
        }
        Ok(Self {
            word: word.to_string(),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}

/// Drives one lookup from query string to [`Reply`].
#[derive(Clone)]
pub struct Dispatcher {
    upstream: Arc<dyn DictionaryUpstream>,
    timeout: Duration,
}

impl Dispatcher {
    pub fn new(upstream: Arc<dyn DictionaryUpstream>, timeout: Duration) -> Self {
        Self { upstream, timeout }
    }

    /// Validate, call the upstream at most once, and classify.
    pub async fn handle(&self, query: Option<&str>) -> Reply {
        let request = match LookupRequest::from_query(query) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(reason = %e, "Rejecting search request");
                return Reply::MissingInput;
            }
        };

        tracing::debug!(word = %request.word(), "Looking up word");
        let outcome = self.upstream.lookup(request.word(), self.timeout).await;
        let outcome_kind = outcome.kind();
        let result = interpret(outcome);

        tracing::info!(
            word = %request.word(),
            outcome = outcome_kind,
            result = result.kind(),
            "Lookup classified"
        );
        metrics::record_lookup(result.kind());

        Reply::Lookup(result)
    }
}

/// `/search` handler.
pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Reply {
    let span = tracing::info_span!("search", request_id = %request_id(&headers));
    state
        .dispatcher
        .handle(query.as_deref())
        .instrument(span)
        .await
}

/// Fallback for paths no route matched.
pub async fn not_found() -> Reply {
    Reply::RouteNotFound
}
