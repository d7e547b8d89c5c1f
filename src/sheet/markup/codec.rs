//! HTML and XML parser and writer instances.

use super::adapter::sheets_from_tree;
use super::layout::MarkupLayout;
use super::tree::{ContentKind, MarkupTree};
use super::writer::{render_html, render_xml_spreadsheet};
use crate::common::Result;
use crate::format::{Format, SheetParser, SheetWriter};
use crate::sheet::Document;
use log::debug;

fn format_of(layout: &MarkupLayout) -> Format {
    match layout.content {
        ContentKind::Html => Format::Html,
        ContentKind::Xml => Format::Xml,
    }
}

/// Parser producing one sheet per table found in HTML or XML markup.
#[derive(Debug, Clone)]
pub struct MarkupParser {
    layout: MarkupLayout,
    document: Document,
    check_extension: bool,
}

impl MarkupParser {
    pub fn new(layout: MarkupLayout) -> Self {
        MarkupParser {
            layout,
            document: Document::new(),
            check_extension: true,
        }
    }

    pub fn html() -> Self {
        Self::new(MarkupLayout::html())
    }

    pub fn xml() -> Self {
        Self::new(MarkupLayout::xml_spreadsheet())
    }

    pub fn layout(&self) -> &MarkupLayout {
        &self.layout
    }
}

impl SheetParser for MarkupParser {
    fn format(&self) -> Format {
        format_of(&self.layout)
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

    /// Tables land at consecutive sheets starting at `sheet`.
    fn load_str_at(&mut self, text: &str, sheet: usize) -> Result<()> {
        let tree = MarkupTree::parse(text, self.layout.content)?;
        let sheets = sheets_from_tree(&tree, &self.layout)?;
        debug!(
            "found {} {} tables, placing from sheet {}",
            sheets.len(),
            self.format(),
            sheet
        );
        self.document.place_sheets(sheet, sheets)
    }
}

/// Writer rendering sheets as HTML tables or an XML Spreadsheet workbook.
#[derive(Debug, Clone)]
pub struct MarkupWriter {
    layout: MarkupLayout,
    document: Document,
}

impl MarkupWriter {
    pub fn new(layout: MarkupLayout) -> Self {
        MarkupWriter {
            layout,
            document: Document::new(),
        }
    }

    pub fn html() -> Self {
        Self::new(MarkupLayout::html())
    }

    pub fn xml() -> Self {
        Self::new(MarkupLayout::xml_spreadsheet())
    }

    /// Render every sheet of the document.
    pub fn write_document(&self) -> Result<String> {
        let sheets = self.document.sheets();
        debug!("writing {} sheets as {}", sheets.len(), self.format());
        Ok(match self.layout.content {
            ContentKind::Html => render_html(sheets),
            ContentKind::Xml => render_xml_spreadsheet(sheets.iter().enumerate().map(|(i, s)| (i + 1, s))),
        })
    }
}

impl SheetWriter for MarkupWriter {
    fn format(&self) -> Format {
        format_of(&self.layout)
    }

    fn document(&self) -> &Document {
        &self.document
    }

    fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    fn write_sheet(&self, sheet: usize) -> Result<String> {
        let selected = self.document.sheet(sheet)?;
        Ok(match self.layout.content {
            ContentKind::Html => render_html([selected]),
            ContentKind::Xml => render_xml_spreadsheet([(sheet, selected)]),
        })
    }
}
