//! Ingestion statistics
//!
//! Tracks how many rows a source produced, how many were accepted, and the
//! errors behind skipped rows, for reporting after a bulk import.

use serde::{Deserialize, Serialize};

/// Row-level ingestion statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Number of rows accepted
    pub rows_accepted: usize,

    /// Number of rows skipped due to errors
    pub rows_skipped: usize,

    /// Error descriptions for skipped rows
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            rows_accepted: 0,
            rows_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Record an accepted row
    pub fn record_accepted(&mut self) {
        self.total_rows += 1;
        self.rows_accepted += 1;
    }

    /// Record a skipped row with its error description
    pub fn record_skipped(&mut self, error: impl Into<String>) {
        self.total_rows += 1;
        self.rows_skipped += 1;
        self.errors.push(error.into());
    }

    /// Acceptance rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_accepted as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if ingestion was mostly successful (>90% acceptance)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
