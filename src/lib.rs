//! Tabula - tabular interchange between delimited text, markup tables and JSON
//!
//! Every format is parsed into the same model: a [`Document`](sheet::Document)
//! of [`Sheet`](sheet::Sheet)s, each an ordered list of rows of
//! [`Cell`](sheet::Cell)s. Any sheet can then be written back out in any
//! supported format.
//!
//! # Features
//!
//! - **CSV / TSV**: quote-aware parsing and writing, configurable delimiter
//! - **HTML tables**: every `<table>` becomes a sheet
//! - **XML Spreadsheet 2003**: `Worksheet`/`Row`/`Data` with a namespace check
//! - **JSON**: arrays of rows, with optional typed cell objects
//! - **Async loading**: parsers pull text from any [`ByteSource`](io::ByteSource)
//!
//! # Example - Converting TSV to CSV
//!
//! ```rust
//! use tabula::format::{SheetParser, SheetWriter, parser_for, writer_for};
//!
//! let mut parser = parser_for("tsv")?;
//! parser.load_str("name\tnote\r\nbolt\tsize 3, zinc\r\n")?;
//!
//! let mut writer = writer_for("csv")?;
//! writer.insert_sheet(parser.sheet(1)?.clone());
//! assert_eq!(writer.write_string()?, "name,note\r\nbolt,\"size 3, zinc\"\r\n");
//! # Ok::<(), tabula::common::Error>(())
//! ```
//!
//! # Example - Loading a file
//!
//! ```no_run
//! use tabula::format::parser_for;
//! use tabula::io::FileSource;
//!
//! # async fn run() -> tabula::common::Result<()> {
//! let mut parser = parser_for("html")?;
//! let document = parser.read_and_load(&FileSource::new("report.html")).await?;
//! for (index, sheet) in document.sheets().iter().enumerate() {
//!     println!("sheet {}: {} rows", index + 1, sheet.row_count());
//! }
//! # Ok(())
//! # }
//! ```

/// Shared infrastructure: errors, text decoding and XML escaping
pub mod common;

/// Format tags, the parser and writer capabilities, and dispatch
pub mod format;

/// Byte sources and sinks
pub mod io;

/// The sheet model and the per-format codecs
pub mod sheet;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use format::{Format, Parser, SheetParser, SheetWriter, Writer, parser_for, writer_for};
pub use sheet::{Cell, CellConfig, DataType, Document, Sheet};
