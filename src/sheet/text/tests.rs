//! Tests for the delimited-text codec

use super::*;
use crate::common::Error;
use crate::format::{Format, SheetParser, SheetWriter};
use crate::sheet::{Cell, DataType, Sheet};
use proptest::prelude::*;

fn sheet_of(rows: &[Vec<String>]) -> Sheet {
    rows.iter()
        .map(|row| row.iter().map(|v| Cell::new(v.as_str())).collect())
        .collect()
}

fn round_trip(sheet: &Sheet, format: Format) -> Sheet {
    let (mut writer, mut parser) = match format {
        Format::Tsv => (DelimitedWriter::tsv(), DelimitedParser::tsv()),
        _ => (DelimitedWriter::csv(), DelimitedParser::csv()),
    };
    writer.insert_sheet(sheet.clone());
    let text = writer.write_string().unwrap();
    parser.load_str(&text).unwrap();
    parser.into_document().remove_sheet(1).unwrap()
}

#[test]
fn test_csv_parsing() {
    let mut parser = DelimitedParser::csv();
    parser.load_str("name,age,city\nJohn,25,New York\nJane,30,London").unwrap();

    let sheet = parser.sheet(1).unwrap();
    assert_eq!(sheet.row_count(), 3);
    assert_eq!(sheet.column_count(), 3);
    assert_eq!(sheet.cell(2, 1).unwrap().value(), "John");
    assert_eq!(sheet.cell(2, 2).unwrap(), &Cell::new("25"));
    assert_eq!(sheet.cell_by_coordinate("C2").unwrap().value(), "New York");
}

#[test]
fn test_tsv_parsing() {
    let mut parser = DelimitedParser::tsv();
    parser.load_str("a\tb\nc\td").unwrap();

    let sheet = parser.sheet(1).unwrap();
    assert_eq!(sheet.row_count(), 2);
    assert!(sheet.rows().all(|row| row.len() == 2));
    assert_eq!(parser.format(), Format::Tsv);
}

#[test]
fn test_load_into_second_sheet() {
    let mut parser = DelimitedParser::csv();
    parser.load_str("first").unwrap();
    parser.load_str_at("second", 2).unwrap();
    parser.load_str_at("replaced", 1).unwrap();

    assert_eq!(parser.document().sheet_count(), 2);
    assert_eq!(parser.sheet(1).unwrap().cell(1, 1).unwrap().value(), "replaced");
    assert_eq!(parser.sheet(2).unwrap().cell(1, 1).unwrap().value(), "second");
}

#[test]
fn test_failed_parse_leaves_document_untouched() {
    let mut parser = DelimitedParser::csv();
    parser.load_str("keep,me").unwrap();

    let err = parser.load_str("\"open,never closed").unwrap_err();
    assert!(matches!(err, Error::UnterminatedQuote { line: 1 }));
    assert_eq!(parser.sheet(1).unwrap().cell(1, 2).unwrap().value(), "me");

    let err = parser.load_str_at("x", 5).unwrap_err();
    assert!(matches!(err, Error::InvalidSheetIndex(5)));
    assert_eq!(parser.document().sheet_count(), 1);
}

#[test]
fn test_set_delimiter() {
    let mut parser = DelimitedParser::csv();
    parser.set_delimiter(';').load_str("a;b,c").unwrap();
    assert_eq!(parser.sheet(1).unwrap().row(1).unwrap().len(), 2);
}

#[test]
fn test_writer_sheet_selection() {
    let mut writer = DelimitedWriter::csv();
    writer
        .insert_sheet(vec![vec![Cell::new("one")]])
        .insert_sheet(vec![vec![Cell::new("two"), Cell::new("2")]]);

    assert_eq!(writer.write_string().unwrap(), "one\r\n");
    assert_eq!(writer.write_sheet(2).unwrap(), "two,2\r\n");
    assert!(matches!(writer.write_sheet(3), Err(Error::SheetNotFound(3))));

    writer.remove_sheet(1).unwrap();
    assert_eq!(writer.write_string().unwrap(), "two,2\r\n");
}

#[test]
fn test_writer_ignores_data_type() {
    let mut writer = DelimitedWriter::csv();
    writer.insert_sheet(vec![vec![
        Cell::with_type("1.5", DataType::Number),
        Cell::with_type("TRUE", DataType::Logical),
    ]]);
    assert_eq!(writer.write_string().unwrap(), "1.5,TRUE\r\n");
}

#[test]
fn test_instances_do_not_share_documents() {
    let mut first = DelimitedParser::csv();
    let second = DelimitedParser::csv();
    first.load_str("a").unwrap();
    assert_eq!(first.document().sheet_count(), 1);
    assert!(second.document().is_empty());
}

#[test]
fn test_hardened_round_trip() {
    let rows = vec![
        vec!["a,b".to_string(), "\"quoted\"".to_string()],
        vec!["multi\nline".to_string()],
        vec![String::new()],
        vec![],
    ];
    let sheet = sheet_of(&rows);
    assert_eq!(round_trip(&sheet, Format::Csv), sheet);
}

proptest! {
    #[test]
    fn prop_plain_fields_round_trip(
        rows in prop::collection::vec(prop::collection::vec("[a-zA-Z0-9 .]{0,8}", 1..5), 0..8),
        tsv in any::<bool>(),
    ) {
        let sheet = sheet_of(&rows);
        let format = if tsv { Format::Tsv } else { Format::Csv };
        prop_assert_eq!(round_trip(&sheet, format), sheet);
    }

    #[test]
    fn prop_special_fields_round_trip(
        rows in prop::collection::vec(prop::collection::vec("[a-z,\t\"\n]{0,6}", 0..4), 0..6),
    ) {
        let sheet = sheet_of(&rows);
        prop_assert_eq!(round_trip(&sheet, Format::Csv), sheet.clone());
        prop_assert_eq!(round_trip(&sheet, Format::Tsv), sheet);
    }
}
