//! Response rendering.
//!
//! # Responsibilities
//! - Map each [`Reply`] to exactly one status code and HTML body
//! - Escape upstream-provided text before it reaches the page
//!
//! # Status Mapping
//! ```text
//! Success            → 200
//! NotFound           → 404
//! UpstreamTimeout    → 504
//! UpstreamError      → 500 (upstream code shown in the body)
//! MalformedPayload   → 500
//! missing input      → 400
//! unknown route      → 404
//! ```

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use html_escape::encode_text;

use crate::lookup::LookupResult;
use crate::observability::metrics;

/// Everything the gateway can answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A classified lookup.
    Lookup(LookupResult),
    /// `word` was missing or blank.
    MissingInput,
    /// No route matched the path.
    RouteNotFound,
}

impl Reply {
    /// Status code this reply is sent with.
    pub fn status(&self) -> StatusCode {
        match self {
            Reply::Lookup(LookupResult::Success { .. }) => StatusCode::OK,
            Reply::Lookup(LookupResult::NotFound) => StatusCode::NOT_FOUND,
            Reply::Lookup(LookupResult::UpstreamTimeout) => StatusCode::GATEWAY_TIMEOUT,
            Reply::Lookup(LookupResult::UpstreamError { .. } | LookupResult::MalformedPayload) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Reply::MissingInput => StatusCode::BAD_REQUEST,
            Reply::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    /// HTML body for this reply.
    pub fn body(&self) -> String {
        match self {
            Reply::Lookup(LookupResult::Success { word, definition }) => format!(
                "<h1>Results: {}</h1><p>{}</p>",
                encode_text(word),
                encode_text(definition)
            ),
            Reply::Lookup(LookupResult::NotFound) => "<h1>No Results Found</h1>".to_string(),
            Reply::Lookup(LookupResult::UpstreamTimeout) => {
                "<h1>API Error, Gateway Timeout</h1>".to_string()
            }
            Reply::Lookup(LookupResult::UpstreamError { code }) => {
                format!("<h1>API Error ({})</h1>", code)
            }
            Reply::Lookup(LookupResult::MalformedPayload) => {
                format!("<h1>API Error ({})</h1>", StatusCode::INTERNAL_SERVER_ERROR.as_u16())
            }
            Reply::MissingInput => {
                "<h1>Bad Request</h1><p>Missing input. Please provide a word.</p>".to_string()
            }
            Reply::RouteNotFound => "<h1>Not Found</h1>".to_string(),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let status = self.status();
        metrics::record_request(status.as_u16());
        (status, Html(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Reply::Lookup(LookupResult::Success { word: "cat".into(), definition: "a feline".into() }), 200)]
    #[case(Reply::Lookup(LookupResult::NotFound), 404)]
    #[case(Reply::Lookup(LookupResult::UpstreamTimeout), 504)]
    #[case(Reply::Lookup(LookupResult::UpstreamError { code: 503 }), 500)]
    #[case(Reply::Lookup(LookupResult::UpstreamError { code: 500 }), 500)]
    #[case(Reply::Lookup(LookupResult::MalformedPayload), 500)]
    #[case(Reply::MissingInput, 400)]
    #[case(Reply::RouteNotFound, 404)]
    fn test_status_mapping(#[case] reply: Reply, #[case] expected: u16) {
        assert_eq!(reply.status().as_u16(), expected);
        assert_eq!(reply.into_response().status().as_u16(), expected);
    }

    #[test]
    fn test_success_body() {
        let reply = Reply::Lookup(LookupResult::Success {
            word: "cat".into(),
            definition: "a feline".into(),
        });
        assert_eq!(reply.body(), "<h1>Results: cat</h1><p>a feline</p>");
    }

    #[test]
    fn test_upstream_text_is_escaped() {
        let reply = Reply::Lookup(LookupResult::Success {
            word: "<script>".into(),
            definition: "a & b".into(),
        });
        assert_eq!(reply.body(), "<h1>Results: &lt;script&gt;</h1><p>a &amp; b</p>");
    }

    #[test]
    fn test_upstream_code_in_error_body() {
        let reply = Reply::Lookup(LookupResult::UpstreamError { code: 503 });
        assert_eq!(reply.body(), "<h1>API Error (503)</h1>");
    }

    #[test]
    fn test_html_content_type() {
        let response = Reply::MissingInput.into_response();
        let content_type = response.headers()[axum::http::header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }
}
