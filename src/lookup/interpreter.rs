//! Classification of upstream outcomes.

use crate::lookup::payload::first_headword;
use crate::lookup::result::LookupResult;
use crate::upstream::UpstreamOutcome;

/// Status reported when the upstream gave no status of its own.
pub const TRANSPORT_ERROR_CODE: u16 = 500;

/// Map a raw upstream outcome to a [`LookupResult`]. Pure, no I/O.
pub fn interpret(outcome: UpstreamOutcome) -> LookupResult {
    match outcome {
        UpstreamOutcome::TimedOut => LookupResult::UpstreamTimeout,
        UpstreamOutcome::TransportError(_) => LookupResult::UpstreamError {
            code: TRANSPORT_ERROR_CODE,
        },
        UpstreamOutcome::Responded { status, body } if (200..300).contains(&status) => {
            match first_headword(&body) {
                Ok(headword) => LookupResult::Success {
                    word: headword.word,
                    definition: headword.definition,
                },
                Err(e) => {
                    tracing::warn!(status, error = %e, "Malformed dictionary payload");
                    LookupResult::MalformedPayload
                }
            }
        }
        UpstreamOutcome::Responded { status: 404, .. } => LookupResult::NotFound,
        UpstreamOutcome::Responded { status, .. } => LookupResult::UpstreamError { code: status },
    }
}
