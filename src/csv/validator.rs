//! Document-level row validation
//!
//! The validator owns the document-scoped field count: `None` until the
//! first row is accepted, fixed afterwards. Every acceptance decision in
//! the crate goes through here so the invariants live in one place.

use super::error::{CsvError, RowKind};

/// Validates rows against the document invariants
///
/// Holds the required field count and the number of rows accepted so far.
/// The count can be set explicitly before any row is accepted (for sources
/// with a known layout) and is otherwise inferred from the first row.
#[derive(Debug, Clone, Default)]
pub struct RowValidator {
    required: Option<usize>,
    rows_accepted: usize,
}

impl RowValidator {
    /// Create a validator with no fixed field count
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with a pre-declared field count
    pub fn with_field_count(count: usize) -> Self {
        Self {
            required: Some(count),
            rows_accepted: 0,
        }
    }

    /// The fixed field count, if one has been established
    pub fn field_count(&self) -> Option<usize> {
        self.required
    }

    /// Number of rows accepted so far
    pub fn rows_accepted(&self) -> usize {
        self.rows_accepted
    }

    /// Fix the required field count
    ///
    /// Changing an already-established count after rows have been accepted
    /// is an error; re-asserting the same count is permitted.
    pub fn set_field_count(&mut self, count: usize) -> Result<(), CsvError> {
        match self.required {
            Some(required) if required != count && self.rows_accepted > 0 => {
                Err(CsvError::FieldCountMismatch {
                    kind: RowKind::Data,
                    required,
                    actual: count,
                })
            }
            _ => {
                self.required = Some(count);
                Ok(())
            }
        }
    }

    /// Check a field count against the fixed count, if any
    pub fn valid_field_count(&self, count: usize) -> bool {
        match self.required {
            Some(required) => required == count,
            None => true,
        }
    }

    /// A row is valid when its length is consistent with the fixed count
    pub fn valid_row(&self, row: &[String]) -> bool {
        self.valid_field_count(row.len())
    }

    /// A header row additionally requires every name non-empty and unique
    pub fn valid_header_row(&self, row: &[String]) -> bool {
        self.valid_row(row)
            && row.iter().enumerate().all(|(i, name)| {
                !name.is_empty() && !row[i + 1..].contains(name)
            })
    }

    /// A data row carries no constraints beyond the field count
    pub fn valid_data_row(&self, row: &[String]) -> bool {
        self.valid_row(row)
    }

    /// Re-walk a header row and report exactly why it is invalid
    ///
    /// For a duplicate name, the reported index is the first position after
    /// the first occurrence at which the name reoccurs.
    pub fn check_header_row(&self, row: &[String]) -> Result<(), CsvError> {
        for (i, name) in row.iter().enumerate() {
            if name.is_empty() {
                return Err(CsvError::EmptyFieldName {
                    row: row.to_vec(),
                    index: i,
                });
            }
            if let Some(found) = row[i + 1..].iter().position(|other| other == name) {
                return Err(CsvError::DuplicateFieldName {
                    row: row.to_vec(),
                    name: name.clone(),
                    index: i + 1 + found,
                });
            }
        }
        self.check_count(row, RowKind::Header)
    }

    /// Re-walk a data row and report exactly why it is invalid
    pub fn check_data_row(&self, row: &[String]) -> Result<(), CsvError> {
        self.check_count(row, RowKind::Data)
    }

    /// Record an accepted row, fixing the field count if still unset
    pub fn accept(&mut self, row: &[String]) {
        if self.required.is_none() {
            self.required = Some(row.len());
        }
        self.rows_accepted += 1;
    }

    fn check_count(&self, row: &[String], kind: RowKind) -> Result<(), CsvError> {
        match self.required {
            Some(required) if required != row.len() => Err(CsvError::FieldCountMismatch {
                kind,
                required,
                actual: row.len(),
            }),
            _ => Ok(()),
        }
    }
}
