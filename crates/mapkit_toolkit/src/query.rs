//! URL query-string rendering.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything outside the RFC 3986 unreserved set gets escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes one key or value.
#[must_use]
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Joins pairs as `key=value` segments separated by `&`.
///
/// Segment order follows the iterator; no leading `?` is emitted.
pub fn encode_pairs<'a, K, V, I>(pairs: I) -> String
where
    K: fmt::Display + 'a,
    V: fmt::Display + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                encode_component(&k.to_string()),
                encode_component(&v.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
