//! Token formatting for Splunk-style K=V extraction.
//!
//! Keys and values are quoted or otherwise rewritten so that key-value
//! extraction from an emitted line is unambiguous. Keys are short field
//! names, so their illegal characters are stubbed out destructively; values
//! may be arbitrary content, so they are preserved losslessly via quoting.

use crate::value::Value;

/// Characters that may be used as delimiters between key-value pairs in a
/// log entry, following Splunk extraction conventions.
pub const PAIR_DELIMS: &str = " ,;|&\t\n\r";

/// Characters a formatted key must never contain: the pair delimiters plus
/// the structural `=` and `"`.
pub const ILLEGAL_KEY_CHARS: &str = " ,;|&\t\n\r=\"";

/// Render a key for K=V output.
///
/// An empty key becomes `?`. Delimiter and quoting characters are replaced
/// with hyphens, so a formatted key never needs quoting.
pub fn format_key(key: &Value) -> String {
    let s = key.render();
    if s.is_empty() {
        return "?".to_string();
    }

    s.chars()
        .map(|c| if ILLEGAL_KEY_CHARS.contains(c) { '-' } else { c })
        .collect()
}

/// Render a value for K=V output.
///
/// A value containing a pair delimiter is emitted in quotes with quote,
/// backslash, and control characters escaped; anything else is emitted
/// verbatim, `=` and `"` included.
pub fn format_value(value: &Value) -> String {
    let s = value.render();
    if s.chars().any(|c| PAIR_DELIMS.contains(c)) {
        format!("{:?}", s)
    } else {
        s
    }
}
