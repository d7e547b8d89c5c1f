//! Configuration for delimited text parsing and writing

/// Configuration for the delimited-text codec.
///
/// CSV and TSV share one grammar; they differ only in `delimiter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextConfig {
    /// Field delimiter character
    pub delimiter: char,
    /// Quote character for quoted fields
    pub quote: char,
    /// Terminator appended after every written row
    pub line_terminator: &'static str,
    /// Comment character (lines starting with this are skipped)
    pub comment: Option<char>,
    /// Whether to trim whitespace from parsed fields
    pub trim_whitespace: bool,
    /// Whether to guess cell data types instead of tagging everything `Text`
    pub infer_types: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',          // CSV default
            quote: '"',              // Standard CSV quoting
            line_terminator: "\r\n", // Written after every row
            comment: None,
            trim_whitespace: false,
            infer_types: false,
        }
    }
}

impl TextConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create CSV (comma-separated) configuration
    pub fn csv() -> Self {
        Self::new()
    }

    /// Create TSV (tab-separated) configuration
    pub fn tsv() -> Self {
        Self::new().with_delimiter('\t')
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Set the row terminator used when writing
    pub fn with_line_terminator(mut self, terminator: &'static str) -> Self {
        self.line_terminator = terminator;
        self
    }

    /// Set the comment character (None to disable comments)
    pub fn with_comment(mut self, comment: Option<char>) -> Self {
        self.comment = comment;
        self
    }

    /// Enable/disable whitespace trimming
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// Enable/disable data type inference
    pub fn with_infer_types(mut self, infer: bool) -> Self {
        self.infer_types = infer;
        self
    }
}
