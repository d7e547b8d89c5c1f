//! Unified error type for tabula.
//!
//! Accessor failures (`CellNotFound`, `RowNotFound`, ...) are kept apart from
//! parse failures so callers can tell a bad index from a bad document.
use thiserror::Error;

/// Main error type for tabula operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Cell address outside the sheet (1-based row/column)
    #[error("Cell not found: row {row}, column {column}")]
    CellNotFound { row: usize, column: usize },

    /// Row index outside the sheet (1-based)
    #[error("Row not found: {0}")]
    RowNotFound(usize),

    /// Column index outside the widest row (1-based)
    #[error("Column not found: {0}")]
    ColumnNotFound(usize),

    /// Sheet index outside the document (1-based)
    #[error("Sheet not found: {0}")]
    SheetNotFound(usize),

    /// A parse target that would leave a gap between sheets
    #[error("Invalid sheet index {0}: sheets must be placed contiguously")]
    InvalidSheetIndex(usize),

    /// Byte source could not be located
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Byte source failed while reading or decoding
    #[error("Error reading file: {0}")]
    ErrorReadingFile(String),

    /// Sink failed to accept the output
    #[error("Error writing file: {0}")]
    ErrorWritingFile(String),

    /// Declared format does not match the source's extension
    #[error("File extension mismatch: expected {expected}, found {found}")]
    FileExtensionMismatch { expected: String, found: String },

    /// Unknown format tag at dispatch
    #[error("Filetype not supported: {0}")]
    FiletypeNotSupported(String),

    /// Markup could not be parsed or lacks the expected structure
    #[error("Invalid document format: {0}")]
    InvalidDocumentFormat(String),

    /// Root element does not declare the expected schema namespace
    #[error("Invalid document namespace: expected {expected}, found {}", found.as_deref().unwrap_or("none"))]
    InvalidDocumentNamespace {
        expected: String,
        found: Option<String>,
    },

    /// A quoted field was still open at the end of input
    #[error("Unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },

    /// JSON input could not be parsed into sheets
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    /// Generic error
    #[error("{0}")]
    UnknownError(String),
}

/// Result type for tabula operations.
pub type Result<T> = std::result::Result<T, Error>;
