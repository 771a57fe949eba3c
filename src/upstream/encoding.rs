//! Lookup URL construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Bytes left as-is in a URI component; everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `word` as a single URI component.
pub fn encode_word(word: &str) -> String {
    utf8_percent_encode(word, COMPONENT).to_string()
}

/// Append the encoded `word` to `base` as its final path segment.
pub fn lookup_url(base: &Url, word: &str) -> Result<Url, url::ParseError> {
    let base = base.as_str().trim_end_matches('/');
    Url::parse(&format!("{}/{}", base, encode_word(word)))
}
