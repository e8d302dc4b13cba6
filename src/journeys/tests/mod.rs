//! Unit tests for the journeys layer


/// A well-formed journey export header row
pub const EXPORT_HEADER: &str =
    "Departure,Return,Departure station id,Departure station name,\
Return station id,Return station name,Covered distance (m),Duration (sec.)";

/// Build an owned row from string fields
pub fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

/// A well-formed journey data row
pub fn journey_row() -> Vec<String> {
    row(&[
        "2021-05-31T23:57:25",
        "2021-06-01T00:05:46",
        "94",
        "Laajalahden aukio",
        "100",
        "Teljäntie",
        "2043",
        "500",
    ])
}
