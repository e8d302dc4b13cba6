//! Tests for the streaming handler contract

use super::scanner_over;
use crate::csv::error::CsvError;
use crate::csv::handler::{RowHandler, TesterHandler};
use crate::{Error, Result};

/// Handler recording the order of callbacks
#[derive(Default)]
struct RecordingHandler {
    events: Vec<String>,
    swallow_errors: bool,
}

impl RowHandler for RecordingHandler {
    fn on_header(&mut self, fields: Option<Vec<String>>) -> Result<()> {
        match fields {
            Some(fields) => self.events.push(format!("header:{}", fields.join("|"))),
            None => self.events.push("header:none".to_string()),
        }
        Ok(())
    }

    fn on_row(&mut self, fields: Vec<String>) -> Result<()> {
        self.events.push(format!("row:{}", fields.join("|")));
        Ok(())
    }

    fn on_error(&mut self, error: CsvError) -> std::result::Result<(), CsvError> {
        if self.swallow_errors {
            self.events.push(format!("error:{error}"));
            Ok(())
        } else {
            Err(error)
        }
    }
}

#[test]
fn test_header_then_rows_in_order() {
    let mut scanner = scanner_over("id,name\n1,ada\n2,grace\n");
    let mut handler = RecordingHandler::default();
    scanner.read_all(&mut handler, true).unwrap();

    assert_eq!(
        handler.events,
        vec!["header:id|name", "row:1|ada", "row:2|grace"]
    );
}

#[test]
fn test_headerless_source_signals_none() {
    let mut scanner = scanner_over("1,ada\n");
    let mut handler = RecordingHandler::default();
    scanner.read_all(&mut handler, false).unwrap();

    assert_eq!(handler.events, vec!["header:none", "row:1|ada"]);
}

#[test]
fn test_empty_source_with_required_header() {
    let mut scanner = scanner_over("");
    let mut handler = RecordingHandler::default();
    let error = scanner.read_all(&mut handler, true).unwrap_err();
    assert!(matches!(error, Error::Parse(CsvError::EmptyRow { .. })));
    assert!(handler.events.is_empty());
}

#[test]
fn test_default_on_error_re_raises() {
    let mut scanner = scanner_over("a,b\nx,y,z\n");
    let mut handler = RecordingHandler::default();
    let error = scanner.read_all(&mut handler, false).unwrap_err();
    assert!(matches!(
        error,
        Error::Parse(CsvError::TooManyFields { .. })
    ));
    // The bad row was never delivered.
    assert_eq!(handler.events, vec!["header:none", "row:a|b"]);
}

#[test]
fn test_swallowed_error_continues_from_next_row() {
    let mut scanner = scanner_over("a,b\nx,y,z\nc,d\n");
    let mut handler = RecordingHandler {
        swallow_errors: true,
        ..Default::default()
    };
    scanner.read_all(&mut handler, false).unwrap();

    assert_eq!(handler.events.len(), 4);
    assert_eq!(handler.events[0], "header:none");
    assert_eq!(handler.events[1], "row:a|b");
    assert!(handler.events[2].starts_with("error:"));
    assert_eq!(handler.events[3], "row:c|d");
}

#[test]
fn test_tester_handler_accepts_valid_rows() {
    let mut scanner = scanner_over("id,name\n1,ada\n");
    let mut handler = TesterHandler::new(
        Some(Box::new(|fields: &[String]| fields.len() == 2)),
        Some(Box::new(|fields: &[String]| !fields[0].is_empty())),
    );
    scanner.read_all(&mut handler, true).unwrap();
}

#[test]
fn test_tester_handler_rejects_failing_rows() {
    let mut scanner = scanner_over("id,name\n,ada\n");
    let mut handler = TesterHandler::new(
        None,
        Some(Box::new(|fields: &[String]| !fields[0].is_empty())),
    );
    let error = scanner.read_all(&mut handler, true).unwrap_err();
    assert!(matches!(error, Error::Parse(CsvError::InvalidRow { .. })));
}

#[test]
fn test_row_handler_counts_match_source() {
    // Streaming contract: exactly one header event, then one event per
    // data row, then nothing.
    let mut scanner = scanner_over("h1,h2\na,b\nc,d\n");
    let mut handler = RecordingHandler::default();
    scanner.read_all(&mut handler, true).unwrap();
    assert_eq!(handler.events.len(), 3);
}
