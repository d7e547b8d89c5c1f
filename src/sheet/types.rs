//! Cell-level types of the spreadsheet model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type tag carried by every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    Currency,
    Datetime,
    Formula,
    Logical,
    Number,
    #[default]
    Text,
}

impl DataType {
    /// Upper-case tag name, as used in JSON documents.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DataType::Currency => "CURRENCY",
            DataType::Datetime => "DATETIME",
            DataType::Formula => "FORMULA",
            DataType::Logical => "LOGICAL",
            DataType::Number => "NUMBER",
            DataType::Text => "TEXT",
        }
    }

    /// Guess a type from raw field text.
    ///
    /// Integers and decimals become `Number`, `true`/`false` (any case)
    /// become `Logical`, text starting with `=` becomes `Formula`.
    pub fn infer(value: &str) -> Self {
        if value.is_empty() {
            return DataType::Text;
        }
        if value.len() > 1 && value.starts_with('=') {
            return DataType::Formula;
        }
        if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
            return DataType::Logical;
        }
        // fast-float accepts "inf"/"nan"; require at least one digit
        let numeric = value.parse::<i64>().is_ok()
            || (value.bytes().any(|b| b.is_ascii_digit())
                && fast_float2::parse::<f64, _>(value).is_ok());
        if numeric { DataType::Number } else { DataType::Text }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partial cell description.
///
/// Only the fields that are present override a cell's defaults; unknown
/// keys in a deserialized object are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CellConfig {
    pub value: Option<String>,
    pub data_type: Option<DataType>,
}

impl CellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }
}

/// Smallest addressable unit of a sheet: a string value and its type tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    value: String,
    data_type: DataType,
}

impl Cell {
    /// Create a `Text` cell.
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_type(value, DataType::Text)
    }

    pub fn with_type(value: impl Into<String>, data_type: DataType) -> Self {
        Cell {
            value: value.into(),
            data_type,
        }
    }

    /// Build a cell from a partial configuration, keeping defaults for
    /// anything the configuration omits.
    pub fn from_config(config: CellConfig) -> Self {
        let mut cell = Cell::default();
        cell.apply(config);
        cell
    }

    /// Override the fields present in `config`.
    pub fn apply(&mut self, config: CellConfig) {
        if let Some(value) = config.value {
            self.value = value;
        }
        if let Some(data_type) = config.data_type {
            self.data_type = data_type;
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_data_type(&mut self, data_type: DataType) {
        self.data_type = data_type;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::new(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::new(value)
    }
}

impl From<CellConfig> for Cell {
    fn from(config: CellConfig) -> Self {
        Cell::from_config(config)
    }
}

/// One line of a sheet; position in the vector is the column.
pub type Row = Vec<Cell>;

/// A sheet's body. Rows may differ in length.
pub type Records = Vec<Row>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_default_type() {
        let cell = Cell::from_config(CellConfig::new().with_value("5"));
        assert_eq!(cell.value(), "5");
        assert_eq!(cell.data_type(), DataType::Text);
    }

    #[test]
    fn test_partial_config_keeps_default_value() {
        let cell = Cell::from_config(CellConfig::new().with_data_type(DataType::Number));
        assert_eq!(cell.value(), "");
        assert_eq!(cell.data_type(), DataType::Number);
    }

    #[test]
    fn test_config_ignores_unknown_fields() {
        let config: CellConfig =
            serde_json::from_str(r#"{"value": "x", "style": "bold", "dataType": "LOGICAL"}"#).unwrap();
        let cell = Cell::from(config);
        assert_eq!(cell, Cell::with_type("x", DataType::Logical));
    }

    #[test]
    fn test_apply_does_not_overwrite_missing_fields() {
        let mut cell = Cell::with_type("12.5", DataType::Currency);
        cell.apply(CellConfig::new().with_value("13"));
        assert_eq!(cell, Cell::with_type("13", DataType::Currency));
    }

    #[test]
    fn test_infer() {
        assert_eq!(DataType::infer("42"), DataType::Number);
        assert_eq!(DataType::infer("-3.5e2"), DataType::Number);
        assert_eq!(DataType::infer("TRUE"), DataType::Logical);
        assert_eq!(DataType::infer("=SUM(A1:A2)"), DataType::Formula);
        assert_eq!(DataType::infer("inf"), DataType::Text);
        assert_eq!(DataType::infer("="), DataType::Text);
        assert_eq!(DataType::infer(""), DataType::Text);
        assert_eq!(DataType::infer("hello"), DataType::Text);
    }

    #[test]
    fn test_display_is_value() {
        assert_eq!(Cell::with_type("7", DataType::Number).to_string(), "7");
        assert_eq!(DataType::Datetime.to_string(), "DATETIME");
    }
}
