//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert errors of the
//! markup and JSON backends into the unified Error type.

use super::types::Error;

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::InvalidDocumentFormat(err.to_string())
    }
}

impl Error {
    /// Prefix a markup failure with the input position it was found at.
    pub(crate) fn at_position(self, position: u64) -> Self {
        match self {
            Error::InvalidDocumentFormat(message) => Error::InvalidDocumentFormat(format!(
                "markup error at position {}: {}",
                position, message
            )),
            other => other,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedJson(err.to_string())
    }
}
