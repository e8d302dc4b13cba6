//! Field and row grammar for the simple CSV format
//!
//! Implements the row grammar as an explicit quote-state scan instead of
//! regular expressions, which makes the "extra delimiter" and "stray
//! character" tie-breaks exact and testable.
//!
//! A field is either quoted (quote, runs of non-quote characters or doubled
//! quotes, quote) or unquoted (no delimiter or quote characters). The
//! delimiter is a comma tolerating surrounding whitespace, and whitespace
//! around the whole row is ignored. Rows are single physical lines; quoted
//! fields spanning line breaks are outside this grammar.
//!
//! All offsets are byte offsets into the raw line. The grammar characters
//! are ASCII, so scanning bytes is safe on any UTF-8 line.

use crate::constants::{DELIMITER, QUOTE};

/// What followed a successfully matched field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// A field delimiter; `at` is the offset of the delimiter character and
    /// `next` the offset of the following field
    Delimiter { at: usize, next: usize },
    /// End of the row (possibly after trailing whitespace)
    EndOfRow,
}

/// One raw field token matched out of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldToken<'a> {
    /// Raw field text, quote wrapper still in place
    pub raw: &'a str,
    /// Offset of the first byte of the field
    pub start: usize,
    /// Offset one past the last byte of the field
    pub end: usize,
    /// What terminated the field
    pub terminator: Terminator,
}

/// Match the next field of `line` starting at `offset`
///
/// On success the token carries the raw field and the delimiter (or end of
/// row) that followed it. On failure the returned offset is where the
/// grammar stopped making progress: a stray quote inside an unquoted field,
/// an unexpected character after a quoted field, or the opening quote of an
/// unterminated quoted field.
pub fn next_field(line: &str, offset: usize) -> Result<FieldToken<'_>, usize> {
    let bytes = line.as_bytes();
    let start = skip_whitespace(bytes, offset);

    if start < bytes.len() && bytes[start] == QUOTE as u8 {
        quoted_field(line, start)
    } else {
        unquoted_field(line, start)
    }
}

/// Check whether an entire line matches the row grammar
///
/// A row is one or more delimiter-separated fields. The empty line matches
/// as a row of one empty field, consistent with the field grammar.
pub fn is_row(line: &str) -> bool {
    let mut offset = 0;
    loop {
        match next_field(line, offset) {
            Err(_) => return false,
            Ok(token) => match token.terminator {
                Terminator::EndOfRow => return true,
                Terminator::Delimiter { next, .. } => offset = next,
            },
        }
    }
}

fn quoted_field(line: &str, start: usize) -> Result<FieldToken<'_>, usize> {
    let bytes = line.as_bytes();
    let mut i = start + 1;
    let end = loop {
        while i < bytes.len() && bytes[i] != QUOTE as u8 {
            i += 1;
        }
        if i >= bytes.len() {
            // No closing quote on this line.
            return Err(start);
        }
        if i + 1 < bytes.len() && bytes[i + 1] == QUOTE as u8 {
            // Doubled quote, part of the field.
            i += 2;
            continue;
        }
        break i + 1;
    };

    let terminator = terminator_after(bytes, end)?;
    Ok(FieldToken {
        raw: &line[start..end],
        start,
        end,
        terminator,
    })
}

fn unquoted_field(line: &str, start: usize) -> Result<FieldToken<'_>, usize> {
    let bytes = line.as_bytes();
    let mut i = start;
    while i < bytes.len() && bytes[i] != DELIMITER as u8 && bytes[i] != QUOTE as u8 {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == QUOTE as u8 {
        // A quote may only open a field.
        return Err(i);
    }

    // Whitespace between the field and its terminator belongs to the
    // delimiter (or to the row padding), not to the field.
    let mut end = i;
    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }

    let terminator = if i >= bytes.len() {
        Terminator::EndOfRow
    } else {
        Terminator::Delimiter {
            at: i,
            next: skip_whitespace(bytes, i + 1),
        }
    };
    Ok(FieldToken {
        raw: &line[start..end],
        start,
        end,
        terminator,
    })
}

/// Resolve what follows a completed quoted field
fn terminator_after(bytes: &[u8], end: usize) -> Result<Terminator, usize> {
    let j = skip_whitespace(bytes, end);
    if j >= bytes.len() {
        Ok(Terminator::EndOfRow)
    } else if bytes[j] == DELIMITER as u8 {
        Ok(Terminator::Delimiter {
            at: j,
            next: skip_whitespace(bytes, j + 1),
        })
    } else {
        Err(j)
    }
}

fn skip_whitespace(bytes: &[u8], mut offset: usize) -> usize {
    while offset < bytes.len() && bytes[offset].is_ascii_whitespace() {
        offset += 1;
    }
    offset
}
