//! Writer capability and the closed set of writer implementations.

use super::Format;
use crate::common::Result;
use crate::io::Sink;
use crate::sheet::json::JsonWriter;
use crate::sheet::markup::MarkupWriter;
use crate::sheet::text::DelimitedWriter;
use crate::sheet::{Document, Sheet};
use log::debug;

/// Document-to-text capability implemented once per format.
pub trait SheetWriter {
    /// Format this writer produces.
    fn format(&self) -> Format;

    fn document(&self) -> &Document;

    fn document_mut(&mut self) -> &mut Document;

    /// Serialize sheet `sheet` (1-based).
    fn write_sheet(&self, sheet: usize) -> Result<String>;

    /// Serialize the first sheet.
    fn write_string(&self) -> Result<String> {
        self.write_sheet(1)
    }

    /// Append a sheet; bare records are wrapped into a new sheet.
    fn insert_sheet(&mut self, data: impl Into<Sheet>) -> &mut Self
    where
        Self: Sized,
    {
        self.document_mut().insert_sheet(data);
        self
    }

    /// Remove sheet `index` (1-based).
    fn remove_sheet(&mut self, index: usize) -> Result<Sheet> {
        self.document_mut().remove_sheet(index)
    }

    /// Serialize `sheet` and hand the bytes to `sink` with this format's MIME type.
    fn save(&self, sink: &mut dyn Sink, sheet: usize) -> Result<()> {
        let text = self.write_sheet(sheet)?;
        debug!("saving {} bytes as {}", text.len(), self.format().mime_type());
        sink.save(text.as_bytes(), self.format().mime_type())
    }
}

/// A writer for one of the supported formats.
#[derive(Debug, Clone)]
pub enum Writer {
    Delimited(DelimitedWriter),
    Markup(MarkupWriter),
    Json(JsonWriter),
}

impl Writer {
    /// Create a writer with its own empty document.
    pub fn new(format: Format) -> Self {
        match format {
            Format::Csv => Writer::Delimited(DelimitedWriter::csv()),
            Format::Tsv => Writer::Delimited(DelimitedWriter::tsv()),
            Format::Html => Writer::Markup(MarkupWriter::html()),
            Format::Xml => Writer::Markup(MarkupWriter::xml()),
            Format::Json => Writer::Json(JsonWriter::new()),
        }
    }
}

impl SheetWriter for Writer {
    fn format(&self) -> Format {
        match self {
            Writer::Delimited(w) => w.format(),
            Writer::Markup(w) => w.format(),
            Writer::Json(w) => w.format(),
        }
    }

    fn document(&self) -> &Document {
        match self {
            Writer::Delimited(w) => w.document(),
            Writer::Markup(w) => w.document(),
            Writer::Json(w) => w.document(),
        }
    }

    fn document_mut(&mut self) -> &mut Document {
        match self {
            Writer::Delimited(w) => w.document_mut(),
            Writer::Markup(w) => w.document_mut(),
            Writer::Json(w) => w.document_mut(),
        }
    }

    fn write_sheet(&self, sheet: usize) -> Result<String> {
        match self {
            Writer::Delimited(w) => w.write_sheet(sheet),
            Writer::Markup(w) => w.write_sheet(sheet),
            Writer::Json(w) => w.write_sheet(sheet),
        }
    }
}

/// Get a writer for a format tag such as `"csv"` or `"xml"`.
///
/// Unknown tags fail with `FiletypeNotSupported`.
pub fn writer_for(tag: &str) -> Result<Writer> {
    Ok(Writer::new(Format::from_tag(tag)?))
}
