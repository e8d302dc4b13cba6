//! Unit tests for the CSV parsing core

pub mod handler_tests;
pub mod scanner_tests;

use std::io::Cursor;

use super::scanner::RowScanner;

/// Build a scanner over an in-memory source
pub fn scanner_over(content: &str) -> RowScanner<Cursor<Vec<u8>>> {
    RowScanner::new(Cursor::new(content.as_bytes().to_vec()))
}

/// Convenience for building owned rows in assertions
pub fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}
