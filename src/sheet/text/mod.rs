//! Delimited text support (CSV, TSV).
//!
//! One quote-aware grammar parameterized by [`TextConfig`]; TSV is CSV with
//! a tab delimiter and its own format tag.
//!
//! # Example
//!
//! ```rust
//! use tabula::format::{SheetParser, SheetWriter};
//! use tabula::sheet::text::{DelimitedParser, DelimitedWriter};
//!
//! let mut parser = DelimitedParser::csv();
//! parser.load_str("name,city\nJane,\"London, UK\"")?;
//! let sheet = parser.sheet(1)?;
//! assert_eq!(sheet.cell(2, 2)?.value(), "London, UK");
//!
//! let mut writer = DelimitedWriter::tsv();
//! writer.insert_sheet(sheet.clone());
//! assert_eq!(writer.write_string()?, "name\tcity\r\nJane\tLondon, UK\r\n");
//! # Ok::<(), tabula::common::Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod parser;
pub mod writer;

pub use codec::{DelimitedParser, DelimitedWriter};
pub use config::TextConfig;
pub use parser::TextParser;
pub use writer::write_delimited;

#[cfg(test)]
mod tests;
