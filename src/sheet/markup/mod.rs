//! Markup table support (HTML tables, XML Spreadsheet 2003).
//!
//! Both readers share one adapter: the markup is parsed into a
//! [`MarkupTree`], and a [`MarkupLayout`] names the table, row and cell
//! elements to collect. The XML reader also checks the root namespace.

pub mod adapter;
pub mod codec;
pub mod layout;
pub mod tree;
pub mod writer;

pub use adapter::{sheets_from_tree, validate_namespace};
pub use codec::{MarkupParser, MarkupWriter};
pub use layout::{MarkupLayout, SPREADSHEET_NAMESPACE};
pub use tree::{ContentKind, Element, MarkupTree, Node};
