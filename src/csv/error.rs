//! Parse-time error taxonomy for the CSV core
//!
//! Every failure carries the offending row and a position (a character
//! offset into the raw line, or a field index) so that callers can produce
//! actionable messages. These are data errors only; transport failures are
//! reported through [`crate::Error::Io`].

use serde::{Deserialize, Serialize};

/// The role of the row an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    /// A row of field names
    Header,
    /// A row of field values
    Data,
}

impl std::fmt::Display for RowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowKind::Header => write!(f, "header"),
            RowKind::Data => write!(f, "data"),
        }
    }
}

/// Structural CSV parse failures
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// A line does not match the row grammar at all
    #[error("invalid {kind} row at offset {position}: {row:?}")]
    InvalidRow {
        kind: RowKind,
        row: String,
        position: usize,
    },

    /// A field was followed by neither a delimiter nor end of row
    #[error("too few fields on row at offset {position}: {row:?}")]
    TooFewFields { row: String, position: usize },

    /// A delimiter followed the field at the required field count
    #[error("too many fields on row at offset {position}: {row:?}")]
    TooManyFields { row: String, position: usize },

    /// Row field count conflicts with the document's fixed field count
    #[error("{kind} row has {actual} fields, document requires {required}")]
    FieldCountMismatch {
        kind: RowKind,
        required: usize,
        actual: usize,
    },

    /// A header field name is empty
    #[error("empty field name at index {index}")]
    EmptyFieldName { row: Vec<String>, index: usize },

    /// A header field name repeats; `index` is the first reoccurrence
    #[error("duplicate field name {name:?} at index {index}")]
    DuplicateFieldName {
        row: Vec<String>,
        name: String,
        index: usize,
    },

    /// A second header row was submitted to the same document
    #[error("duplicate header row")]
    DuplicateHeader { row: Vec<String> },

    /// A header row was submitted after data rows were accepted
    #[error("header row submitted after {rows} data rows")]
    HeaderAfterData { rows: usize },

    /// A header or data row was expected but the source produced nothing
    #[error("empty {kind} row")]
    EmptyRow { kind: RowKind },

    /// Mutation was attempted after ingestion finished
    #[error("document is closed")]
    ClosedDocument,
}

impl CsvError {
    /// The diagnostic position of the error, when one exists
    ///
    /// For scanner errors this is a character offset into the raw line; for
    /// header validation errors it is a field index.
    pub fn position(&self) -> Option<usize> {
        match self {
            CsvError::InvalidRow { position, .. }
            | CsvError::TooFewFields { position, .. }
            | CsvError::TooManyFields { position, .. } => Some(*position),
            CsvError::EmptyFieldName { index, .. }
            | CsvError::DuplicateFieldName { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// The row role the error refers to, when one is recorded
    pub fn row_kind(&self) -> Option<RowKind> {
        match self {
            CsvError::InvalidRow { kind, .. }
            | CsvError::FieldCountMismatch { kind, .. }
            | CsvError::EmptyRow { kind } => Some(*kind),
            CsvError::TooFewFields { .. } | CsvError::TooManyFields { .. } => Some(RowKind::Data),
            CsvError::EmptyFieldName { .. }
            | CsvError::DuplicateFieldName { .. }
            | CsvError::DuplicateHeader { .. }
            | CsvError::HeaderAfterData { .. } => Some(RowKind::Header),
            CsvError::ClosedDocument => None,
        }
    }
}
