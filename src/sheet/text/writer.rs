//! Serializer for delimited text formats

use super::config::TextConfig;
use crate::sheet::Row;

/// Serialize rows with the configured delimiter.
///
/// Every row is followed by the line terminator. A field is quoted (and its
/// quotes doubled) when it holds the delimiter, the quote character or a
/// line break, so the output parses back to the same values.
pub fn write_delimited(records: &[Row], config: &TextConfig) -> String {
    let mut out = String::new();

    for row in records {
        for (col_idx, cell) in row.iter().enumerate() {
            if col_idx > 0 {
                out.push(config.delimiter);
            }

            let value = cell.value();
            if needs_quotes(value, config, col_idx == 0, row.len() == 1) {
                out.push(config.quote);
                for ch in value.chars() {
                    if ch == config.quote {
                        out.push(config.quote);
                    }
                    out.push(ch);
                }
                out.push(config.quote);
            } else {
                out.push_str(value);
            }
        }
        out.push_str(config.line_terminator);
    }

    out
}

fn needs_quotes(value: &str, config: &TextConfig, first: bool, lone: bool) -> bool {
    // A lone empty field would otherwise read back as an empty row
    if lone && value.is_empty() {
        return true;
    }
    if value.contains(|c: char| c == config.delimiter || c == config.quote || c == '\r' || c == '\n') {
        return true;
    }
    if first && config.comment.is_some_and(|c| value.starts_with(c)) {
        return true;
    }
    config.trim_whitespace && value.trim().len() != value.len()
}
