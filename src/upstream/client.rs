//! Dictionary API client with a lookup deadline.
//!
//! # Responsibilities
//! - Build the lookup URL for a word
//! - Race the response headers, then the body, against one lookup deadline
//! - Report exactly one [`UpstreamOutcome`] per call

use std::time::{Duration, Instant};

use futures_util::future::{BoxFuture, FutureExt};
use tokio::time::timeout_at;
use url::Url;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::encoding::lookup_url;
use crate::upstream::outcome::{UpstreamError, UpstreamOutcome};

/// Something that can look a word up in a dictionary.
///
/// The dispatcher depends on this trait rather than on [`UpstreamClient`].
pub trait DictionaryUpstream: Send + Sync {
    /// Look `word` up, giving up once `deadline` has elapsed.
    fn lookup<'a>(&'a self, word: &'a str, deadline: Duration) -> BoxFuture<'a, UpstreamOutcome>;
}

/// HTTP client for the dictionary API.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: Url,
}

impl UpstreamClient {
    /// Create a new client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(&config.base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .no_proxy()
            .build()
            .map_err(UpstreamError::Client)?;

        Ok(Self { http, base_url })
    }

    /// Base URL lookups are issued against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a single GET for `word`.
    ///
    /// The deadline covers connecting, receiving headers and reading the body.
    /// When it expires the pending exchange is dropped, which closes its
    /// connection, and nothing further from that exchange is observed.
    pub async fn fetch(&self, word: &str, deadline: Duration) -> UpstreamOutcome {
        let url = match lookup_url(&self.base_url, word) {
            Ok(url) => url,
            Err(e) => return UpstreamOutcome::TransportError(e.into()),
        };

        tracing::debug!(url = %url, "Calling dictionary API");
        let start = Instant::now();
        let expires = tokio::time::Instant::now() + deadline;

        let response = match timeout_at(expires, self.http.get(url).send()).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Dictionary API request failed");
                metrics::record_upstream(start);
                return UpstreamOutcome::TransportError(UpstreamError::Request(e));
            }
            Err(_) => {
                tracing::warn!(?deadline, "Dictionary API request timed out");
                metrics::record_upstream(start);
                return UpstreamOutcome::TimedOut;
            }
        };

        let status = response.status().as_u16();
        let outcome = match timeout_at(expires, response.bytes()).await {
            Ok(Ok(body)) => UpstreamOutcome::Responded { status, body },
            Ok(Err(e)) => {
                tracing::warn!(status, error = %e, "Dictionary API body read failed");
                UpstreamOutcome::TransportError(UpstreamError::Body(e))
            }
            Err(_) => {
                tracing::warn!(status, ?deadline, "Dictionary API body timed out");
                UpstreamOutcome::TimedOut
            }
        };
        metrics::record_upstream(start);
        outcome
    }
}

impl DictionaryUpstream for UpstreamClient {
    fn lookup<'a>(&'a self, word: &'a str, deadline: Duration) -> BoxFuture<'a, UpstreamOutcome> {
        self.fetch(word, deadline).boxed()
    }
}
