//! Parser capability and the closed set of parser implementations.

use super::Format;
use crate::common::Result;
use crate::io::{ByteSource, read_and_load};
use crate::sheet::json::JsonParser;
use crate::sheet::markup::MarkupParser;
use crate::sheet::text::DelimitedParser;
use crate::sheet::{Document, Sheet};

/// Text-to-document capability implemented once per format.
pub trait SheetParser {
    /// Format this parser reads.
    fn format(&self) -> Format;

    /// Document populated by previous loads.
    fn document(&self) -> &Document;

    /// Give up the parser and keep its document.
    fn into_document(self) -> Document
    where
        Self: Sized;

    /// Whether named byte sources must carry a matching extension.
    fn checks_extension(&self) -> bool;

    fn set_extension_check(&mut self, enabled: bool);

    /// Parse `text` and place the result at sheet `sheet` (1-based).
    ///
    /// Either every produced sheet is placed or, on failure, the document
    /// is left as it was.
    fn load_str_at(&mut self, text: &str, sheet: usize) -> Result<()>;

    /// Parse `text` into the first sheet.
    fn load_str(&mut self, text: &str) -> Result<()> {
        self.load_str_at(text, 1)
    }

    /// Get sheet `number` (1-based) of the document.
    fn sheet(&self, number: usize) -> Result<&Sheet> {
        self.document().sheet(number)
    }
}

/// A parser for one of the supported formats.
#[derive(Debug, Clone)]
pub enum Parser {
    Delimited(DelimitedParser),
    Markup(MarkupParser),
    Json(JsonParser),
}

impl Parser {
    /// Create a parser with its own empty document.
    pub fn new(format: Format) -> Self {
        match format {
            Format::Csv => Parser::Delimited(DelimitedParser::csv()),
            Format::Tsv => Parser::Delimited(DelimitedParser::tsv()),
            Format::Html => Parser::Markup(MarkupParser::html()),
            Format::Xml => Parser::Markup(MarkupParser::xml()),
            Format::Json => Parser::Json(JsonParser::new()),
        }
    }

    /// Read all text from `source` and load it into the first sheet.
    ///
    /// Holding `&mut self` for the whole read means a second load cannot
    /// start on this instance until the first completes or is dropped.
    pub async fn read_and_load<S: ByteSource>(&mut self, source: &S) -> Result<&Document> {
        read_and_load(self, source).await
    }
}

impl SheetParser for Parser {
    fn format(&self) -> Format {
        match self {
            Parser::Delimited(p) => p.format(),
            Parser::Markup(p) => p.format(),
            Parser::Json(p) => p.format(),
        }
    }

    fn document(&self) -> &Document {
        match self {
            Parser::Delimited(p) => p.document(),
            Parser::Markup(p) => p.document(),
            Parser::Json(p) => p.document(),
        }
    }

    fn into_document(self) -> Document {
        match self {
            Parser::Delimited(p) => p.into_document(),
            Parser::Markup(p) => p.into_document(),
            Parser::Json(p) => p.into_document(),
        }
    }

    fn checks_extension(&self) -> bool {
        match self {
            Parser::Delimited(p) => p.checks_extension(),
            Parser::Markup(p) => p.checks_extension(),
            Parser::Json(p) => p.checks_extension(),
        }
    }

    fn set_extension_check(&mut self, enabled: bool) {
        match self {
            Parser::Delimited(p) => p.set_extension_check(enabled),
            Parser::Markup(p) => p.set_extension_check(enabled),
            Parser::Json(p) => p.set_extension_check(enabled),
        }
    }

    fn load_str_at(&mut self, text: &str, sheet: usize) -> Result<()> {
        match self {
            Parser::Delimited(p) => p.load_str_at(text, sheet),
            Parser::Markup(p) => p.load_str_at(text, sheet),
            Parser::Json(p) => p.load_str_at(text, sheet),
        }
    }
}

/// Get a parser for a format tag such as `"csv"` or `"html"`.
///
/// Unknown tags fail with `FiletypeNotSupported`.
pub fn parser_for(tag: &str) -> Result<Parser> {
    Ok(Parser::new(Format::from_tag(tag)?))
}
