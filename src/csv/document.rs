//! In-memory CSV document and the handler writing into it
//!
//! A document owns its header names (optional) and data rows, and goes
//! through the ingestion states `Empty -> (HeaderSet | FirstDataRowSeen) ->
//! Accumulating -> Closed`. All acceptance decisions delegate to the
//! [`RowValidator`]; the document never re-implements validation rules.

use std::sync::Arc;

use super::error::{CsvError, RowKind};
use super::handler::RowHandler;
use super::validator::RowValidator;
use crate::{Error, Result};

/// One logical data row with index- and name-based field access
///
/// Rows built from a document with headers share the header names, so
/// name-based lookup needs no per-row copies.
#[derive(Debug, Clone)]
pub struct DataRow {
    values: Vec<String>,
    headers: Option<Arc<Vec<String>>>,
}

impl DataRow {
    /// Field value by index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Field value by header name, if the document has headers
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        let headers = self.headers.as_ref()?;
        let index = headers.iter().position(|header| header == name)?;
        self.get(index)
    }

    /// All field values in source order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the row has no fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A sink accumulating validated rows during ingestion
///
/// Mutable only through `set_headers` / `add_data_row` until `close`; all
/// mutation afterwards fails with [`CsvError::ClosedDocument`].
pub trait Document {
    /// Does this document insist the source declares a header row
    fn requires_header(&self) -> bool {
        false
    }

    /// The header names, once set
    fn header_fields(&self) -> Option<&[String]>;

    /// Set the header names
    ///
    /// Fails when headers are already set, when data rows already exist,
    /// when validation rejects the names, or when the document is closed.
    fn set_headers(&mut self, names: Vec<String>) -> std::result::Result<(), CsvError>;

    /// Append a validated data row
    fn add_data_row(&mut self, values: Vec<String>) -> std::result::Result<(), CsvError>;

    /// Data row by index
    fn row(&self, index: usize) -> Option<&DataRow>;

    /// Number of data rows
    fn row_count(&self) -> usize;

    /// The fixed field count, once established
    fn field_count(&self) -> Option<usize>;

    /// Finish ingestion; no further mutation is permitted
    fn close(&mut self);

    /// True once ingestion has finished
    fn is_closed(&self) -> bool;
}

/// Buffering document holding all rows in memory
#[derive(Debug, Clone, Default)]
pub struct SimpleDocument {
    requires_header: bool,
    headers: Option<Arc<Vec<String>>>,
    rows: Vec<DataRow>,
    validator: RowValidator,
    closed: bool,
}

impl SimpleDocument {
    /// Create a document that does not insist on a header row
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document that requires the source to declare a header row
    pub fn with_required_header() -> Self {
        Self {
            requires_header: true,
            ..Self::default()
        }
    }

    /// All data rows in source order
    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }
}

impl Document for SimpleDocument {
    fn requires_header(&self) -> bool {
        self.requires_header
    }

    fn header_fields(&self) -> Option<&[String]> {
        self.headers.as_ref().map(|headers| headers.as_slice())
    }

    fn set_headers(&mut self, names: Vec<String>) -> std::result::Result<(), CsvError> {
        if self.closed {
            return Err(CsvError::ClosedDocument);
        }
        if self.headers.is_some() {
            return Err(CsvError::DuplicateHeader { row: names });
        }
        if !self.rows.is_empty() {
            return Err(CsvError::HeaderAfterData {
                rows: self.rows.len(),
            });
        }
        self.validator.check_header_row(&names)?;
        self.validator.accept(&names);
        self.headers = Some(Arc::new(names));
        Ok(())
    }

    fn add_data_row(&mut self, values: Vec<String>) -> std::result::Result<(), CsvError> {
        if self.closed {
            return Err(CsvError::ClosedDocument);
        }
        self.validator.check_data_row(&values)?;
        self.validator.accept(&values);
        self.rows.push(DataRow {
            values,
            headers: self.headers.clone(),
        });
        Ok(())
    }

    fn row(&self, index: usize) -> Option<&DataRow> {
        self.rows.get(index)
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn field_count(&self) -> Option<usize> {
        self.validator.field_count()
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Handler storing validated rows into a document sink
#[derive(Debug)]
pub struct DocumentHandler<D: Document> {
    document: D,
}

impl<D: Document> DocumentHandler<D> {
    /// Create a handler writing into the given document
    pub fn new(document: D) -> Self {
        Self { document }
    }

    /// The document being filled
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Take the document out of the handler
    pub fn into_document(self) -> D {
        self.document
    }
}

impl<D: Document> RowHandler for DocumentHandler<D> {
    fn on_header(&mut self, fields: Option<Vec<String>>) -> Result<()> {
        match fields {
            Some(names) => self.document.set_headers(names).map_err(Error::Parse),
            None if self.document.requires_header() => Err(CsvError::EmptyRow {
                kind: RowKind::Header,
            }
            .into()),
            None => Ok(()),
        }
    }

    fn on_row(&mut self, fields: Vec<String>) -> Result<()> {
        self.document.add_data_row(fields).map_err(Error::Parse)
    }
}
