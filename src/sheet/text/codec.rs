//! Delimited-text parser and writer instances.

use super::config::TextConfig;
use super::parser::TextParser;
use super::writer::write_delimited;
use crate::common::Result;
use crate::format::{Format, SheetParser, SheetWriter};
use crate::sheet::{Document, Sheet};
use log::debug;

/// CSV/TSV parser owning the document it fills.
#[derive(Debug, Clone)]
pub struct DelimitedParser {
    format: Format,
    config: TextConfig,
    document: Document,
    check_extension: bool,
}

impl DelimitedParser {
    pub fn new(format: Format, config: TextConfig) -> Self {
        DelimitedParser {
            format,
            config,
            document: Document::new(),
            check_extension: true,
        }
    }

    pub fn csv() -> Self {
        Self::new(Format::Csv, TextConfig::csv())
    }

    pub fn tsv() -> Self {
        Self::new(Format::Tsv, TextConfig::tsv())
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut TextConfig {
        &mut self.config
    }

    /// Change the field delimiter for subsequent loads.
    pub fn set_delimiter(&mut self, delimiter: char) -> &mut Self {
        self.config.delimiter = delimiter;
        self
    }
}

impl SheetParser for DelimitedParser {
    fn format(&self) -> Format {
        self.format
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
        let records = TextParser::new(&self.config).parse(text)?;
        debug!(
            "parsed {} rows of {} into sheet {}",
            records.len(),
            self.format,
            sheet
        );
        self.document.set_sheet(sheet, Sheet::from_records(records))
    }
}

/// CSV/TSV writer serializing one sheet of its document.
#[derive(Debug, Clone)]
pub struct DelimitedWriter {
    format: Format,
    config: TextConfig,
    document: Document,
}

impl DelimitedWriter {
    pub fn new(format: Format, config: TextConfig) -> Self {
        DelimitedWriter {
            format,
            config,
            document: Document::new(),
        }
    }

    pub fn csv() -> Self {
        Self::new(Format::Csv, TextConfig::csv())
    }

    pub fn tsv() -> Self {
        Self::new(Format::Tsv, TextConfig::tsv())
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    /// Change the field delimiter for subsequent writes.
    pub fn set_delimiter(&mut self, delimiter: char) -> &mut Self {
        self.config.delimiter = delimiter;
        self
    }
}

impl SheetWriter for DelimitedWriter {
    fn format(&self) -> Format {
        self.format
    }

    fn document(&self) -> &Document {
        &self.document
    }

    fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    fn write_sheet(&self, sheet: usize) -> Result<String> {
        let records = self.document.sheet(sheet)?.records();
        debug!("writing {} rows of sheet {} as {}", records.len(), sheet, self.format);
        Ok(write_delimited(records, &self.config))
    }
}
