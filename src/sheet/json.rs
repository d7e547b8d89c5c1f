//! JSON codec.
//!
//! A sheet is an array of rows and a row is an array of cells. A cell may be
//! a string, number, boolean, `null`, or a partial cell object such as
//! `{"value": "5"}` or `{"value": "1", "dataType": "NUMBER"}`. A multi-sheet
//! document is written as `{"sheets": [sheet, ...]}`.

use crate::common::{Error, Result};
use crate::format::{Format, SheetParser, SheetWriter};
use crate::sheet::{Cell, CellConfig, DataType, Document, Records, Row, Sheet};
use log::debug;
use serde::Serialize;
use serde_json::Value;

/// Parse JSON text into sheets.
pub fn sheets_from_json(text: &str) -> Result<Vec<Sheet>> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(_) => Ok(vec![sheet_from_value(value)?]),
        Value::Object(mut object) => match object.remove("sheets") {
            Some(Value::Array(sheets)) => sheets.into_iter().map(sheet_from_value).collect(),
            _ => Err(Error::MalformedJson(
                "expected an array of rows or an object with a \"sheets\" array".to_string(),
            )),
        },
        _ => Err(Error::MalformedJson(
            "expected an array of rows or an object with a \"sheets\" array".to_string(),
        )),
    }
}

fn sheet_from_value(value: Value) -> Result<Sheet> {
    let Value::Array(rows) = value else {
        return Err(Error::MalformedJson("a sheet must be an array of rows".to_string()));
    };
    rows.into_iter()
        .map(|row| match row {
            Value::Array(cells) => cells.into_iter().map(cell_from_value).collect::<Result<Row>>(),
            _ => Err(Error::MalformedJson("a row must be an array of cells".to_string())),
        })
        .collect::<Result<Records>>()
        .map(Sheet::from_records)
}

fn cell_from_value(value: Value) -> Result<Cell> {
    match value {
        Value::String(text) => Ok(Cell::new(text)),
        Value::Number(number) => Ok(Cell::with_type(number.to_string(), DataType::Number)),
        Value::Bool(flag) => Ok(Cell::with_type(flag.to_string(), DataType::Logical)),
        Value::Null => Ok(Cell::default()),
        object @ Value::Object(_) => {
            let config: CellConfig = serde_json::from_value(object)?;
            Ok(Cell::from_config(config))
        },
        Value::Array(_) => Err(Error::MalformedJson(
            "nested array where a cell was expected".to_string(),
        )),
    }
}

#[derive(Serialize)]
struct DocumentJson<'a> {
    sheets: Vec<&'a Records>,
}

/// JSON parser owning the document it fills.
#[derive(Debug, Clone)]
pub struct JsonParser {
    document: Document,
    check_extension: bool,
}

impl JsonParser {
    pub fn new() -> Self {
        JsonParser {
            document: Document::new(),
            check_extension: true,
        }
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetParser for JsonParser {
    fn format(&self) -> Format {
        Format::Json
    }

    fn document(&self) -> &Document {
        &self.document
    }

    fn into_document(self) -> Document {
        self.document
    }

    fn checks_extension(&self) -> bool {
        self.check_extension
    }

    fn set_extension_check(&mut self, enabled: bool) {
        self.check_extension = enabled;
    }

    fn load_str_at(&mut self, text: &str, sheet: usize) -> Result<()> {
        let sheets = sheets_from_json(text)?;
        debug!("parsed {} JSON sheets, placing from sheet {}", sheets.len(), sheet);
        self.document.place_sheets(sheet, sheets)
    }
}

/// JSON writer; cells are written as `{"value", "dataType"}` objects.
#[derive(Debug, Clone, Default)]
pub struct JsonWriter {
    document: Document,
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent the output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Write every sheet as `{"sheets": [...]}`.
    pub fn write_document(&self) -> Result<String> {
        let body = DocumentJson {
            sheets: self.document.sheets().iter().map(Sheet::records).collect(),
        };
        self.encode(&body)
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

impl SheetWriter for JsonWriter {
    fn format(&self) -> Format {
        Format::Json
    }

    fn document(&self) -> &Document {
        &self.document
    }

    fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    fn write_sheet(&self, sheet: usize) -> Result<String> {
        self.encode(self.document.sheet(sheet)?.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_cells() {
        let sheets =
            sheets_from_json(r#"[["a", 1.5, true, null, {"value": "5"}, {"dataType": "CURRENCY"}]]"#)
                .unwrap();
        let row = sheets[0].row(1).unwrap();
        assert_eq!(
            row,
            &vec![
                Cell::new("a"),
                Cell::with_type("1.5", DataType::Number),
                Cell::with_type("true", DataType::Logical),
                Cell::default(),
                Cell::new("5"),
                Cell::with_type("", DataType::Currency),
            ]
        );
    }

    #[test]
    fn test_multi_sheet_object() {
        let sheets = sheets_from_json(r#"{"sheets": [[["a"]], [], [["b"], []]]}"#).unwrap();
        assert_eq!(sheets.len(), 3);
        assert!(sheets[1].is_empty());
        assert_eq!(sheets[2].row_count(), 2);
    }

    #[test]
    fn test_malformed_inputs() {
        for text in ["[[\"a\"", "42", r#"{"rows": []}"#, r#"[["a", ["nested"]]]"#, r#"["row"]"#] {
            let err = sheets_from_json(text).unwrap_err();
            assert!(matches!(err, Error::MalformedJson(_)), "{text}: {err}");
        }
    }

    #[test]
    fn test_writer_round_trip() {
        let mut writer = JsonWriter::new();
        writer.insert_sheet(vec![vec![
            Cell::with_type("2", DataType::Number),
            Cell::new("x"),
        ]]);
        let text = writer.write_string().unwrap();
        assert_eq!(
            text,
            r#"[[{"value":"2","dataType":"NUMBER"},{"value":"x","dataType":"TEXT"}]]"#
        );

        let mut parser = JsonParser::new();
        parser.load_str(&text).unwrap();
        assert_eq!(parser.sheet(1).unwrap(), writer.document().sheet(1).unwrap());

        let mut parser = JsonParser::new();
        parser.load_str(&writer.write_document().unwrap()).unwrap();
        assert_eq!(parser.document(), writer.document());
    }
}
