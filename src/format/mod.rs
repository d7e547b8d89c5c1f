//! Format registry and dispatch.
//!
//! A format tag selects a parser or writer. Every call returns a fresh
//! instance with its own [`Document`](crate::sheet::Document); nothing is
//! shared between instances.
//!
//! ```rust
//! use tabula::format::{SheetParser, SheetWriter, parser_for, writer_for};
//!
//! let mut parser = parser_for("tsv")?;
//! parser.load_str("a\tb\r\nc\td\r\n")?;
//!
//! let mut writer = writer_for("csv")?;
//! writer.insert_sheet(parser.sheet(1)?.clone());
//! assert_eq!(writer.write_string()?, "a,b\r\nc,d\r\n");
//!
//! assert!(parser_for("xlsx").is_err());
//! # Ok::<(), tabula::common::Error>(())
//! ```

mod parser;
mod writer;

pub use parser::{Parser, SheetParser, parser_for};
pub use writer::{SheetWriter, Writer, writer_for};

use crate::common::{Error, Result};
use phf::phf_map;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported interchange formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Csv,
    Tsv,
    Html,
    Xml,
    Json,
}

// Tags and file extensions share one namespace
static FORMAT_TAGS: phf::Map<&'static str, Format> = phf_map! {
    "csv" => Format::Csv,
    "tsv" => Format::Tsv,
    "tab" => Format::Tsv,
    "html" => Format::Html,
    "htm" => Format::Html,
    "xml" => Format::Xml,
    "json" => Format::Json,
};

impl Format {
    pub const ALL: [Format; 5] = [Format::Csv, Format::Tsv, Format::Html, Format::Xml, Format::Json];

    /// Look up a format by tag or extension (case-insensitive).
    pub fn from_tag(tag: &str) -> Result<Self> {
        FORMAT_TAGS
            .get(tag.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| Error::FiletypeNotSupported(tag.to_string()))
    }

    /// Pick a format from a file name's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| Error::FiletypeNotSupported(path.display().to_string()))?;
        Self::from_tag(extension)
    }

    /// Canonical tag.
    pub const fn tag(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Tsv => "tsv",
            Format::Html => "html",
            Format::Xml => "xml",
            Format::Json => "json",
        }
    }

    pub const fn mime_type(&self) -> &'static str {
        match self {
            Format::Csv => "text/csv",
            Format::Tsv => "text/tab-separated-values",
            Format::Html => "text/html",
            Format::Xml => "text/xml",
            Format::Json => "application/json",
        }
    }

    /// File extensions accepted for this format.
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Csv => &["csv"],
            Format::Tsv => &["tsv", "tab"],
            Format::Html => &["html", "htm"],
            Format::Xml => &["xml"],
            Format::Json => &["json"],
        }
    }

    /// Check that `name` carries one of this format's extensions.
    ///
    /// Names without an extension pass, since there is nothing to compare.
    pub fn check_extension(&self, name: &str) -> Result<()> {
        let Some(extension) = Path::new(name).extension().and_then(|ext| ext.to_str()) else {
            return Ok(());
        };
        if self
            .extensions()
            .iter()
            .any(|known| known.eq_ignore_ascii_case(extension))
        {
            Ok(())
        } else {
            Err(Error::FileExtensionMismatch {
                expected: self.tag().to_string(),
                found: extension.to_string(),
            })
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(Format::from_tag("CSV").unwrap(), Format::Csv);
        assert_eq!("htm".parse::<Format>().unwrap(), Format::Html);
        for format in Format::ALL {
            assert_eq!(Format::from_tag(format.tag()).unwrap(), format);
        }
        assert!(matches!(Format::from_tag("xlsx"), Err(Error::FiletypeNotSupported(t)) if t == "xlsx"));
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(Format::Csv.mime_type(), "text/csv");
        assert_eq!(Format::Tsv.mime_type(), "text/tab-separated-values");
        assert_eq!(Format::Html.mime_type(), "text/html");
        assert_eq!(Format::Xml.mime_type(), "text/xml");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Format::from_path("dir/report.TSV").unwrap(), Format::Tsv);
        assert!(matches!(Format::from_path("README"), Err(Error::FiletypeNotSupported(_))));
    }

    #[test]
    fn test_check_extension() {
        assert!(Format::Html.check_extension("page.HTM").is_ok());
        assert!(Format::Csv.check_extension("no_extension").is_ok());
        let err = Format::Csv.check_extension("data.tsv").unwrap_err();
        assert!(matches!(
            err,
            Error::FileExtensionMismatch { ref expected, ref found } if expected == "csv" && found == "tsv"
        ));
    }

    #[test]
    fn test_dispatch_by_tag() {
        for format in Format::ALL {
            assert_eq!(parser_for(format.tag()).unwrap().format(), format);
            assert_eq!(writer_for(format.tag()).unwrap().format(), format);
        }
        assert!(matches!(writer_for("pdf"), Err(Error::FiletypeNotSupported(_))));
    }

    #[test]
    fn test_instances_are_independent() {
        let mut first = parser_for("csv").unwrap();
        let second = parser_for("csv").unwrap();
        first.load_str("a,b").unwrap();
        assert_eq!(first.document().sheet_count(), 1);
        assert!(second.document().is_empty());
    }

    #[test]
    fn test_every_format_round_trips_text_cells() {
        use crate::sheet::{Cell, Sheet};

        let sheet = Sheet::from_records(vec![
            vec![Cell::new("name"), Cell::new("note")],
            vec![Cell::new("bolt"), Cell::new("a, \"b\" & <c>")],
        ]);
        for format in Format::ALL {
            let mut writer = Writer::new(format);
            writer.insert_sheet(sheet.clone());
            let text = writer.write_string().unwrap();

            let mut parser = Parser::new(format);
            parser.load_str(&text).unwrap();
            assert_eq!(parser.sheet(1).unwrap(), &sheet, "{format}: {text}");
        }
    }
}
