//! Journeys CSV Library
//!
//! A Rust library for parsing delimited-text journey data into validated,
//! typed rows for storage.
//!
//! This library provides tools for:
//! - Streaming CSV tokenization with quoting/escaping rules
//! - Header/data row distinction with one-shot header handling
//! - Field-count inference and enforcement across a document
//! - Structural defect detection with character-offset diagnostics
//! - Buffering (in-memory document) and streaming (callback) row sinks
//! - Typed city bike journey records assembled from validated rows

pub mod constants;

// CSV parsing core
pub mod csv {
    pub mod document;
    pub mod error;
    pub mod escape;
    pub mod grammar;
    pub mod handler;
    pub mod scanner;
    pub mod stats;
    pub mod validator;

    #[cfg(test)]
    pub mod tests;

    pub use document::{DataRow, Document, DocumentHandler, SimpleDocument};
    pub use error::{CsvError, RowKind};
    pub use handler::{RowHandler, TesterHandler};
    pub use scanner::RowScanner;
    pub use stats::ParseStats;
    pub use validator::RowValidator;
}

// Typed journey records built on top of the CSV core
pub mod journeys {
    pub mod loader;
    pub mod model;

    #[cfg(test)]
    pub mod tests;

    pub use loader::JourneysLoader;
    pub use model::Journey;
}

// Re-export commonly used types
pub use csv::{CsvError, RowHandler, RowScanner, SimpleDocument};
pub use journeys::{Journey, JourneysLoader};

/// Result type alias for journey CSV processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for journey CSV processing operations
///
/// Parse-time data errors are carried by [`csv::CsvError`] so that callers
/// can distinguish bad data from bad transport.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parse error (structural defect in the data)
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::CsvError),

    /// Data validation error (well-formed CSV, invalid content)
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// True if the error is a parse-time data error rather than a
    /// transport failure
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
