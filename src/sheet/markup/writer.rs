//! Renders sheets as HTML tables or an XML Spreadsheet 2003 workbook.

use super::layout::SPREADSHEET_NAMESPACE;
use crate::common::xml::escape_xml;
use crate::sheet::{DataType, Sheet};
use std::fmt::Write;

/// Render each sheet as one `<table>`.
pub fn render_html<'a>(sheets: impl IntoIterator<Item = &'a Sheet>) -> String {
    let mut out = String::new();
    for sheet in sheets {
        out.push_str("<table>\n");
        for row in sheet.rows() {
            out.push_str("<tr>");
            for cell in row {
                let _ = write!(out, "<td>{}</td>", escape_xml(cell.value()));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</table>\n");
    }
    out
}

/// Render a workbook with one named worksheet per `(number, sheet)` pair.
pub fn render_xml_spreadsheet<'a>(sheets: impl IntoIterator<Item = (usize, &'a Sheet)>) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?>\n");
    let _ = writeln!(
        out,
        "<Workbook xmlns=\"{ns}\" xmlns:ss=\"{ns}\">",
        ns = SPREADSHEET_NAMESPACE
    );
    for (number, sheet) in sheets {
        let _ = writeln!(out, " <Worksheet ss:Name=\"Sheet{}\">", number);
        out.push_str("  <Table>\n");
        for row in sheet.rows() {
            out.push_str("   <Row>\n");
            for cell in row {
                let _ = writeln!(
                    out,
                    "    <Cell><Data ss:Type=\"{}\">{}</Data></Cell>",
                    spreadsheet_type(cell.data_type()),
                    escape_xml(cell.value())
                );
            }
            out.push_str("   </Row>\n");
        }
        out.push_str("  </Table>\n");
        out.push_str(" </Worksheet>\n");
    }
    out.push_str("</Workbook>\n");
    out
}

fn spreadsheet_type(data_type: DataType) -> &'static str {
    match data_type {
        DataType::Number => "Number",
        DataType::Logical => "Boolean",
        DataType::Datetime => "DateTime",
        DataType::Currency | DataType::Formula | DataType::Text => "String",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Cell;

    #[test]
    fn test_html_escapes_cells() {
        let sheet = Sheet::from_records(vec![vec![Cell::new("a<b"), Cell::new("c&d")]]);
        assert_eq!(
            render_html([&sheet]),
            "<table>\n<tr><td>a&lt;b</td><td>c&amp;d</td></tr>\n</table>\n"
        );
    }

    #[test]
    fn test_xml_types() {
        let sheet = Sheet::from_records(vec![vec![
            Cell::with_type("1", DataType::Number),
            Cell::with_type("TRUE", DataType::Logical),
        ]]);
        let xml = render_xml_spreadsheet([(1, &sheet)]);
        assert!(xml.contains("<Worksheet ss:Name=\"Sheet1\">"));
        assert!(xml.contains("<Data ss:Type=\"Number\">1</Data>"));
        assert!(xml.contains("<Data ss:Type=\"Boolean\">TRUE</Data>"));
    }
}
