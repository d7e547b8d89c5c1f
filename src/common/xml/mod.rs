//! XML helpers shared by the markup reader and writers.

mod escape;

pub(crate) use escape::resolve_reference;
pub use escape::{escape_xml, unescape_xml};
