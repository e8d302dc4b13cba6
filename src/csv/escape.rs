//! Escaping codec for CSV field values
//!
//! Pure conversions between raw CSV field text and logical string values.
//! Malformed quoting (a stray quote with no terminator) is a grammar-level
//! concern and never reaches these functions.

use crate::constants::{DELIMITER, QUOTE};

/// Check whether a value must be quote-wrapped to survive the row grammar
///
/// True if the value contains the delimiter, a quote character, a control
/// character, or leading/trailing whitespace.
pub fn needs_escaping(value: &str) -> bool {
    if value.chars().next().is_some_and(char::is_whitespace)
        || value.chars().next_back().is_some_and(char::is_whitespace)
    {
        return true;
    }
    value
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c.is_control())
}

/// Escape a field value for writing
///
/// Quote-wraps the value and doubles every internal quote character when
/// [`needs_escaping`] holds; otherwise returns the value unchanged.
pub fn escape(value: &str) -> String {
    if !needs_escaping(value) {
        return value.to_string();
    }
    let mut result = String::with_capacity(value.len() + 2);
    result.push(QUOTE);
    for c in value.chars() {
        if c == QUOTE {
            result.push(QUOTE);
        }
        result.push(c);
    }
    result.push(QUOTE);
    result
}

/// Recover the logical value from a raw field token
///
/// Strips the outer quotes and collapses doubled quote characters when the
/// token is quote-wrapped; otherwise returns the token unchanged. Exact
/// left inverse of [`escape`] for all of its outputs.
pub fn unescape(raw: &str) -> String {
    let is_wrapped = raw.len() >= 2 && raw.starts_with(QUOTE) && raw.ends_with(QUOTE);
    if !is_wrapped {
        return raw.to_string();
    }
    let inner = &raw[QUOTE.len_utf8()..raw.len() - QUOTE.len_utf8()];
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        result.push(c);
        if c == QUOTE {
            // Doubled quote collapses to one.
            chars.next();
        }
    }
    result
}
