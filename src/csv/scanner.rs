//! Streaming row scanner
//!
//! Pulls one logical row at a time from a buffered source, splits it into
//! raw field tokens with the grammar, unescapes each token, and reports
//! malformed rows with a byte offset into the raw line. The scanner borrows
//! its source for its lifetime and never closes it; stream lifecycle belongs
//! to the caller.

use std::io::BufRead;

use tracing::{debug, trace};

use super::document::{Document, DocumentHandler};
use super::error::{CsvError, RowKind};
use super::grammar::{self, Terminator};
use super::handler::RowHandler;
use super::{escape, validator::RowValidator};
use crate::constants::UTF8_BOM;
use crate::{Error, Result};

/// Streaming CSV row scanner over a buffered source
///
/// The scanner owns the field-count inference for the stream it reads: the
/// first successfully parsed row fixes the count, and later rows with a
/// delimiter beyond that count fail with [`CsvError::TooManyFields`].
#[derive(Debug)]
pub struct RowScanner<R> {
    source: R,
    validator: RowValidator,
    line_number: usize,
    exhausted: bool,
}

impl<R: BufRead> RowScanner<R> {
    /// Create a scanner with no fixed field count
    pub fn new(source: R) -> Self {
        Self {
            source,
            validator: RowValidator::new(),
            line_number: 0,
            exhausted: false,
        }
    }

    /// Create a scanner with a pre-declared field count
    pub fn with_field_count(source: R, count: usize) -> Self {
        Self {
            source,
            validator: RowValidator::with_field_count(count),
            line_number: 0,
            exhausted: false,
        }
    }

    /// The field count established for this stream, if any
    pub fn field_count(&self) -> Option<usize> {
        self.validator.field_count()
    }

    /// Declare the required field count
    ///
    /// Fails once a conflicting count has been established against rows
    /// already read.
    pub fn set_field_count(&mut self, count: usize) -> Result<()> {
        self.validator.set_field_count(count)?;
        Ok(())
    }

    /// One-based number of the last line read
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next logical row
    ///
    /// Returns `None` when the source is exhausted. On success the fields
    /// are unescaped, and the first successful row fixes the field count if
    /// it is still unset.
    pub fn next_row(&mut self) -> Result<Option<Vec<String>>> {
        self.read_row(RowKind::Data)
    }

    /// Read the next row and validate it as a header row
    pub fn read_header_row(&mut self) -> Result<Option<Vec<String>>> {
        match self.read_row(RowKind::Header)? {
            None => Ok(None),
            Some(fields) => {
                self.validator.check_header_row(&fields)?;
                Ok(Some(fields))
            }
        }
    }

    /// Read the next row and validate it as a data row
    pub fn read_data_row(&mut self) -> Result<Option<Vec<String>>> {
        match self.read_row(RowKind::Data)? {
            None => Ok(None),
            Some(fields) => {
                self.validator.check_data_row(&fields)?;
                Ok(Some(fields))
            }
        }
    }

    /// Drive the whole source through a handler
    ///
    /// With `requires_header` the first row is delivered through
    /// [`RowHandler::on_header`]; an exhausted source fails with
    /// [`CsvError::EmptyRow`]. Without it the handler observes
    /// `on_header(None)` so it knows the source declares no header. Data
    /// rows follow in source order. Parse errors are routed through
    /// [`RowHandler::on_error`], which may swallow them to continue from the
    /// next row; I/O errors propagate unchanged.
    pub fn read_all<H: RowHandler + ?Sized>(
        &mut self,
        handler: &mut H,
        requires_header: bool,
    ) -> Result<()> {
        if requires_header {
            match self.read_header_row() {
                Ok(None) => {
                    return Err(CsvError::EmptyRow {
                        kind: RowKind::Header,
                    }
                    .into());
                }
                Ok(Some(fields)) => handler.on_header(Some(fields))?,
                Err(Error::Parse(parse_error)) => {
                    handler.on_error(parse_error).map_err(Error::Parse)?;
                    // A recovered header error still leaves the document
                    // without a header, which the contract requires.
                    return Err(CsvError::EmptyRow {
                        kind: RowKind::Header,
                    }
                    .into());
                }
                Err(other) => return Err(other),
            }
        } else {
            handler.on_header(None)?;
        }

        loop {
            match self.read_data_row() {
                Ok(None) => break,
                Ok(Some(fields)) => {
                    if let Err(error) = handler.on_row(fields) {
                        match error {
                            Error::Parse(parse_error) => {
                                handler.on_error(parse_error).map_err(Error::Parse)?;
                            }
                            other => return Err(other),
                        }
                    }
                }
                Err(Error::Parse(parse_error)) => {
                    handler.on_error(parse_error).map_err(Error::Parse)?;
                }
                Err(other) => return Err(other),
            }
        }

        debug!(lines = self.line_number, "source exhausted");
        Ok(())
    }

    /// Read the whole source into a document sink and close it
    pub fn parse_into<D: Document>(&mut self, document: D) -> Result<D> {
        let requires_header = document.requires_header();
        let mut handler = DocumentHandler::new(document);
        self.read_all(&mut handler, requires_header)?;
        let mut document = handler.into_document();
        document.close();
        Ok(document)
    }

    fn read_row(&mut self, kind: RowKind) -> Result<Option<Vec<String>>> {
        let Some(line) = self.next_line()? else {
            return Ok(None);
        };

        if !grammar::is_row(&line) {
            return Err(CsvError::InvalidRow {
                kind,
                row: line,
                position: 0,
            }
            .into());
        }

        let mut fields = Vec::new();
        let mut offset = 0;
        loop {
            let token = match grammar::next_field(&line, offset) {
                Ok(token) => token,
                Err(stopped_at) => {
                    return Err(CsvError::TooFewFields {
                        row: line,
                        position: stopped_at,
                    }
                    .into());
                }
            };
            fields.push(escape::unescape(token.raw));
            match token.terminator {
                Terminator::Delimiter { at, next } => {
                    if self.validator.field_count() == Some(fields.len()) {
                        // The delimiter promises a field beyond the
                        // required count.
                        return Err(CsvError::TooManyFields {
                            row: line,
                            position: at,
                        }
                        .into());
                    }
                    offset = next;
                }
                Terminator::EndOfRow => break,
            }
        }

        trace!(line = self.line_number, fields = fields.len(), "row parsed");
        self.validator.accept(&fields);
        Ok(Some(fields))
    }

    /// Read the next physical line, stripping the line break and, on the
    /// first line, a UTF-8 byte order mark
    fn next_line(&mut self) -> Result<Option<String>> {
        if self.exhausted {
            return Ok(None);
        }
        let mut line = String::new();
        let read = self
            .source
            .read_line(&mut line)
            .map_err(|e| Error::io(format!("failed to read line {}", self.line_number + 1), e))?;
        if read == 0 {
            self.exhausted = true;
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        if self.line_number == 0 {
            if let Some(stripped) = line.strip_prefix(UTF8_BOM) {
                line = stripped.to_string();
            }
        }
        self.line_number += 1;
        Ok(Some(line))
    }
}
