//! Tests for the streaming row scanner

use super::{row, scanner_over};
use crate::Error;
use crate::csv::error::{CsvError, RowKind};

#[test]
fn test_next_row_splits_and_unescapes() {
    let mut scanner = scanner_over("a,b,c\n\"say \"\"hi\"\", friend\",x,y\n");
    assert_eq!(scanner.next_row().unwrap(), Some(row(&["a", "b", "c"])));
    assert_eq!(
        scanner.next_row().unwrap(),
        Some(row(&["say \"hi\", friend", "x", "y"]))
    );
    assert_eq!(scanner.next_row().unwrap(), None);
}

#[test]
fn test_exhausted_source_stays_exhausted() {
    let mut scanner = scanner_over("a,b\n");
    assert!(scanner.next_row().unwrap().is_some());
    assert_eq!(scanner.next_row().unwrap(), None);
    assert_eq!(scanner.next_row().unwrap(), None);
}

#[test]
fn test_crlf_line_breaks() {
    let mut scanner = scanner_over("a,b\r\nc,d\r\n");
    assert_eq!(scanner.next_row().unwrap(), Some(row(&["a", "b"])));
    assert_eq!(scanner.next_row().unwrap(), Some(row(&["c", "d"])));
    assert_eq!(scanner.next_row().unwrap(), None);
}

#[test]
fn test_bom_stripped_from_first_line() {
    let mut scanner = scanner_over("\u{feff}a,b\nc,d\n");
    assert_eq!(scanner.next_row().unwrap(), Some(row(&["a", "b"])));
    assert_eq!(scanner.next_row().unwrap(), Some(row(&["c", "d"])));
}

#[test]
fn test_first_row_fixes_field_count() {
    let mut scanner = scanner_over("a,b,c\n");
    assert_eq!(scanner.field_count(), None);
    scanner.next_row().unwrap();
    assert_eq!(scanner.field_count(), Some(3));
}

#[test]
fn test_too_many_fields_at_extra_delimiter() {
    let mut scanner = scanner_over("a,b\nx,y,z\n");
    scanner.next_row().unwrap();
    let error = scanner.next_row().unwrap_err();
    match error {
        Error::Parse(CsvError::TooManyFields { row, position }) => {
            assert_eq!(row, "x,y,z");
            // The delimiter after the second field promises a third.
            assert_eq!(position, 3);
        }
        other => panic!("expected TooManyFields, got {other:?}"),
    }
}

#[test]
fn test_invalid_row_at_offset_zero() {
    let mut scanner = scanner_over("\"unterminated\n");
    let error = scanner.next_row().unwrap_err();
    match error {
        Error::Parse(CsvError::InvalidRow { position, row, .. }) => {
            assert_eq!(position, 0);
            assert_eq!(row, "\"unterminated");
        }
        other => panic!("expected InvalidRow, got {other:?}"),
    }
}

#[test]
fn test_set_field_count_conflict_after_rows_read() {
    let mut scanner = scanner_over("a,b,c\n");
    scanner.next_row().unwrap();
    let error = scanner.set_field_count(5).unwrap_err();
    assert!(matches!(
        error,
        Error::Parse(CsvError::FieldCountMismatch {
            required: 3,
            actual: 5,
            ..
        })
    ));
}

#[test]
fn test_declared_field_count_enforced() {
    let mut scanner = scanner_over("a,b,c\n");
    scanner.set_field_count(2).unwrap();
    assert!(matches!(
        scanner.next_row().unwrap_err(),
        Error::Parse(CsvError::TooManyFields { position: 3, .. })
    ));
}

#[test]
fn test_read_header_row_rejects_duplicate_names() {
    let mut scanner = scanner_over("id,name,id\n");
    let error = scanner.read_header_row().unwrap_err();
    match error {
        Error::Parse(CsvError::DuplicateFieldName { name, index, .. }) => {
            assert_eq!(name, "id");
            assert_eq!(index, 2);
        }
        other => panic!("expected DuplicateFieldName, got {other:?}"),
    }
}

#[test]
fn test_read_header_row_rejects_empty_names() {
    let mut scanner = scanner_over("name,,age\n");
    let error = scanner.read_header_row().unwrap_err();
    assert!(matches!(
        error,
        Error::Parse(CsvError::EmptyFieldName { index: 1, .. })
    ));
}

#[test]
fn test_read_data_row_rejects_short_rows() {
    let mut scanner = scanner_over("a,b,c\na,b\n");
    scanner.read_data_row().unwrap();
    let error = scanner.read_data_row().unwrap_err();
    assert!(matches!(
        error,
        Error::Parse(CsvError::FieldCountMismatch {
            kind: RowKind::Data,
            required: 3,
            actual: 2,
        })
    ));
}

#[test]
fn test_line_numbers() {
    let mut scanner = scanner_over("a\nb\nc\n");
    assert_eq!(scanner.line_number(), 0);
    scanner.next_row().unwrap();
    scanner.next_row().unwrap();
    assert_eq!(scanner.line_number(), 2);
}
