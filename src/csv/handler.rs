//! Streaming row handler contract
//!
//! A handler receives at most one header event followed by data rows in
//! source order, letting callers forward rows elsewhere (a database, a
//! typed model) without buffering the whole document.

use super::error::{CsvError, RowKind};
use crate::Result;

/// Per-row callback contract for streaming consumption
///
/// `on_error` defaults to re-raising; implementors may override it to log
/// and continue, in which case the scanner resumes from the next row.
pub trait RowHandler {
    /// Handle the header row
    ///
    /// Called exactly once, before any data row. `None` signals that the
    /// source declares no header.
    fn on_header(&mut self, fields: Option<Vec<String>>) -> Result<()>;

    /// Handle one accepted data row
    ///
    /// Every delivered row has passed validation, so rows within one source
    /// carry an equal number of fields.
    fn on_row(&mut self, fields: Vec<String>) -> Result<()>;

    /// Handle a parse error
    ///
    /// Returning `Ok(())` swallows the error and scanning continues from
    /// the next row. The default re-raises.
    fn on_error(&mut self, error: CsvError) -> std::result::Result<(), CsvError> {
        Err(error)
    }
}

/// Predicate used by [`TesterHandler`]
pub type RowPredicate = Box<dyn Fn(&[String]) -> bool + Send>;

/// Handler that checks rows against predicates without storing anything
///
/// Useful for dry-run verification of a source before a real import.
pub struct TesterHandler {
    header_test: Option<RowPredicate>,
    row_test: Option<RowPredicate>,
}

impl TesterHandler {
    /// Create a tester handler; `None` disables the respective check
    pub fn new(header_test: Option<RowPredicate>, row_test: Option<RowPredicate>) -> Self {
        Self {
            header_test,
            row_test,
        }
    }
}

impl RowHandler for TesterHandler {
    fn on_header(&mut self, fields: Option<Vec<String>>) -> Result<()> {
        if let (Some(test), Some(fields)) = (&self.header_test, &fields) {
            if !test(fields) {
                return Err(CsvError::InvalidRow {
                    kind: RowKind::Header,
                    row: fields.join(","),
                    position: 0,
                }
                .into());
            }
        }
        Ok(())
    }

    fn on_row(&mut self, fields: Vec<String>) -> Result<()> {
        if let Some(test) = &self.row_test {
            if !test(&fields) {
                return Err(CsvError::InvalidRow {
                    kind: RowKind::Data,
                    row: fields.join(","),
                    position: 0,
                }
                .into());
            }
        }
        Ok(())
    }
}
