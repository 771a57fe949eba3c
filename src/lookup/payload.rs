//! Decoding of the dictionary API's entry list.
//!
//! The upstream answers with an array of entries:
//!
//! ```text
//! [ { "word": "...", "meanings": [ { "definitions": [ { "definition": "..." } ] } ] } ]
//! ```
//!
//! Only the first entry, meaning, and definition are read.

use serde_json::Value;
use thiserror::Error;

/// Word shown when the first entry has none.
pub const UNKNOWN_WORD: &str = "Unknown";

/// Definition shown when the path to the first definition is incomplete.
pub const NO_DEFINITION: &str = "No definition available";

const DEFINITION_POINTER: &str = "/0/meanings/0/definitions/0/definition";

/// Why a 2xx body could not be decoded.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("unexpected payload shape: {0}")]
    UnexpectedShape(&'static str),
}

/// The first headword and definition of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headword {
    pub word: String,
    pub definition: String,
}

/// Decode the first headword from a response body.
///
/// Missing, null, non-string, and empty values fall back to
/// [`UNKNOWN_WORD`] and [`NO_DEFINITION`].
pub fn first_headword(body: &[u8]) -> Result<Headword, PayloadError> {
    let root: Value = serde_json::from_slice(body)?;

    let entries = root
        .as_array()
        .ok_or(PayloadError::UnexpectedShape("top level is not an array"))?;
    if let Some(first) = entries.first() {
        if !first.is_object() {
            return Err(PayloadError::UnexpectedShape("first entry is not an object"));
        }
    }

    Ok(Headword {
        word: text_at(&root, "/0/word").unwrap_or(UNKNOWN_WORD).to_string(),
        definition: text_at(&root, DEFINITION_POINTER)
            .unwrap_or(NO_DEFINITION)
            .to_string(),
    })
}

fn text_at<'a>(root: &'a Value, pointer: &str) -> Option<&'a str> {
    root.pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
