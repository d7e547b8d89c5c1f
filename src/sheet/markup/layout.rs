//! Tag layouts describing where tables, rows and cells live in a markup tree.

use super::tree::{ContentKind, Element};

/// Namespace of the XML Spreadsheet 2003 schema.
pub const SPREADSHEET_NAMESPACE: &str = "urn:schemas-microsoft-com:office:spreadsheet";

/// Which elements make up tables, rows and cells.
///
/// HTML names match case-insensitively; XML names match the local name
/// exactly, so `ss:Row` and `Row` are the same row element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupLayout {
    pub content: ContentKind,
    pub table: &'static str,
    pub row: &'static str,
    pub cell: &'static str,
    /// Namespace the root element must declare, if any
    pub namespace: Option<&'static str>,
}

impl MarkupLayout {
    /// `table` / `tr` / `td`
    pub const fn html() -> Self {
        MarkupLayout {
            content: ContentKind::Html,
            table: "table",
            row: "tr",
            cell: "td",
            namespace: None,
        }
    }

    /// `Worksheet` / `Row` / `Data` under the spreadsheet namespace
    pub const fn xml_spreadsheet() -> Self {
        MarkupLayout {
            content: ContentKind::Xml,
            table: "Worksheet",
            row: "Row",
            cell: "Data",
            namespace: Some(SPREADSHEET_NAMESPACE),
        }
    }

    pub fn is_table(&self, element: &Element) -> bool {
        self.matches(element, self.table)
    }

    pub fn is_row(&self, element: &Element) -> bool {
        self.matches(element, self.row)
    }

    pub fn is_cell(&self, element: &Element) -> bool {
        self.matches(element, self.cell)
    }

    fn matches(&self, element: &Element, tag: &str) -> bool {
        match self.content {
            ContentKind::Html => element.name().eq_ignore_ascii_case(tag),
            ContentKind::Xml => element.local_name() == tag,
        }
    }
}
