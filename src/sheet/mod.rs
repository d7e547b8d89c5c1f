//! Spreadsheet model and codecs.
//!
//! The model is deliberately small: a [`Document`] owns [`Sheet`]s, a sheet
//! owns its rows, and a row is a vector of [`Cell`]s. Sheets, rows and
//! columns are addressed 1-based.
//!
//! # Quick Start
//!
//! ```rust
//! use tabula::sheet::{Cell, CellConfig, DataType, Document, Sheet};
//!
//! let mut sheet = Sheet::new();
//! sheet.insert_record(vec![Cell::new("name"), Cell::new("qty")]);
//! sheet.insert_record(vec![
//!     Cell::new("apples"),
//!     Cell::from_config(CellConfig::new().with_value("3").with_data_type(DataType::Number)),
//! ]);
//!
//! let mut document = Document::new();
//! document.insert_sheet(sheet);
//!
//! let qty = document.sheet(1)?.cell(2, 2)?;
//! assert_eq!(qty.value(), "3");
//! assert_eq!(qty.data_type(), DataType::Number);
//! # Ok::<(), tabula::common::Error>(())
//! ```
//!
//! # Codecs
//!
//! - [`text`] - CSV and TSV
//! - [`markup`] - HTML tables and XML Spreadsheet 2003
//! - [`json`] - arrays of rows

// Submodule declarations
pub mod functions;
pub mod json;
pub mod markup;
pub mod text;
pub mod types;
mod workbook;
mod worksheet;

// Re-exports
pub use functions::*;
pub use types::{Cell, CellConfig, DataType, Records, Row};
pub use workbook::Document;
pub use worksheet::{Sheet, column_letters};
