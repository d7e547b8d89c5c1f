//! Converts a markup tree into sheets.

use super::layout::MarkupLayout;
use super::tree::MarkupTree;
use crate::common::{Error, Result};
use crate::sheet::{Cell, Row, Sheet};
use log::trace;

/// Build one sheet per table element, in document order.
///
/// Rows and cells are the table's (and a row's) descendants matching the
/// layout; each cell's text content becomes a `Text` cell. A tree without
/// tables yields no sheets. When the layout names a namespace, the root
/// element must declare it or nothing is produced.
pub fn sheets_from_tree(tree: &MarkupTree, layout: &MarkupLayout) -> Result<Vec<Sheet>> {
    if let Some(expected) = layout.namespace {
        validate_namespace(tree, expected)?;
    }

    let sheets: Vec<Sheet> = tree
        .document()
        .descendants(|e| layout.is_table(e))
        .into_iter()
        .enumerate()
        .map(|(index, table)| {
            let sheet: Sheet = table
                .descendants(|e| layout.is_row(e))
                .into_iter()
                .map(|row| {
                    row.descendants(|e| layout.is_cell(e))
                        .into_iter()
                        .map(|cell| Cell::new(cell.text_content()))
                        .collect::<Row>()
                })
                .collect();
            trace!("table {} has {} rows", index + 1, sheet.row_count());
            sheet
        })
        .collect();

    Ok(sheets)
}

/// Check that the root element lives in `expected`.
///
/// The root's own namespace is the `xmlns:prefix` declaration for a
/// prefixed name, or the default `xmlns` otherwise.
pub fn validate_namespace(tree: &MarkupTree, expected: &str) -> Result<()> {
    let root = tree.root_element().ok_or_else(|| {
        Error::InvalidDocumentFormat("document has no root element".to_string())
    })?;

    let declaration = match root.prefix() {
        Some(prefix) => format!("xmlns:{}", prefix),
        None => "xmlns".to_string(),
    };
    let found = root.attribute(&declaration);

    if found == Some(expected) {
        Ok(())
    } else {
        Err(Error::InvalidDocumentNamespace {
            expected: expected.to_string(),
            found: found.map(str::to_string),
        })
    }
}
