//! Application constants for journey CSV processing
//!
//! This module contains the grammar characters, file format markers,
//! and the journey export column layout used throughout the library.

// =============================================================================
// CSV Grammar Characters
// =============================================================================

/// Field delimiter character
pub const DELIMITER: char = ',';

/// Quote character wrapping escaped fields
pub const QUOTE: char = '"';

/// Byte order mark tolerated at the start of a CSV source
///
/// Journey exports produced on Windows machines carry a UTF-8 BOM before
/// the header row.
pub const UTF8_BOM: char = '\u{feff}';

// =============================================================================
// Journey Export Layout
// =============================================================================

/// Column names of the city bike journey export, in source order
pub const JOURNEY_FIELDS: &[&str] = &[
    "departure_time",
    "return_time",
    "departure_station_id",
    "departure_station_name",
    "return_station_id",
    "return_station_name",
    "distance_m",
    "duration_s",
];

/// Number of fields every journey row must have
pub const JOURNEY_FIELD_COUNT: usize = JOURNEY_FIELDS.len();

/// Timestamp format used by journey exports (e.g. `2021-05-31T23:57:25`)
pub const JOURNEY_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
