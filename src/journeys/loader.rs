//! Bulk loader for journey CSV exports
//!
//! The loader consumes the scanner through the handler interface so that
//! rows can be forwarded into storage without buffering the raw document.
//! Real exports contain occasional malformed lines; those are counted and
//! skipped rather than aborting the import.

use std::io::BufRead;

use tracing::{debug, info, warn};

use crate::constants::JOURNEY_FIELD_COUNT;
use crate::csv::{CsvError, ParseStats, RowHandler, RowKind, RowScanner};
use crate::journeys::model::Journey;
use crate::Result;

/// Handler assembling typed journeys from validated CSV rows
#[derive(Debug, Default)]
pub struct JourneysLoader {
    captions: Option<Vec<String>>,
    journeys: Vec<Journey>,
    stats: ParseStats,
}

impl JourneysLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a whole journey export, header row required
    ///
    /// Returns the accepted journeys together with the ingestion
    /// statistics covering skipped rows.
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<(Vec<Journey>, ParseStats)> {
        let mut scanner = RowScanner::new(reader);
        let mut loader = JourneysLoader::new();
        scanner.read_all(&mut loader, true)?;

        info!(
            accepted = loader.stats.rows_accepted,
            skipped = loader.stats.rows_skipped,
            "journey import finished"
        );
        Ok((loader.journeys, loader.stats))
    }

    /// The header captions observed for the current export
    pub fn captions(&self) -> Option<&[String]> {
        self.captions.as_deref()
    }

    /// Journeys accepted so far
    pub fn journeys(&self) -> &[Journey] {
        &self.journeys
    }

    /// Ingestion statistics so far
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Take the accumulated journeys and statistics out of the loader
    pub fn into_parts(self) -> (Vec<Journey>, ParseStats) {
        (self.journeys, self.stats)
    }
}

impl RowHandler for JourneysLoader {
    fn on_header(&mut self, fields: Option<Vec<String>>) -> Result<()> {
        let Some(fields) = fields else {
            return Err(CsvError::EmptyRow {
                kind: RowKind::Header,
            }
            .into());
        };
        if self.captions.is_some() {
            return Err(CsvError::DuplicateHeader { row: fields }.into());
        }
        if fields.len() != JOURNEY_FIELD_COUNT {
            return Err(CsvError::FieldCountMismatch {
                kind: RowKind::Header,
                required: JOURNEY_FIELD_COUNT,
                actual: fields.len(),
            }
            .into());
        }
        debug!(captions = ?fields, "journey export header");
        self.captions = Some(fields);
        Ok(())
    }

    fn on_row(&mut self, fields: Vec<String>) -> Result<()> {
        match Journey::from_row(&fields) {
            Ok(journey) => {
                self.journeys.push(journey);
                self.stats.record_accepted();
            }
            Err(error) => {
                debug!(row = ?fields, %error, "skipping malformed journey row");
                self.stats
                    .record_skipped(format!("row {}: {}", self.stats.total_rows + 1, error));
            }
        }
        Ok(())
    }

    fn on_error(&mut self, error: CsvError) -> std::result::Result<(), CsvError> {
        // Structural defects in single rows are skipped like malformed
        // journey values; the import carries on from the next row.
        warn!(%error, "skipping structurally invalid row");
        self.stats
            .record_skipped(format!("row {}: {}", self.stats.total_rows + 1, error));
        Ok(())
    }
}
