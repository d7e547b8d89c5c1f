//! Quote-aware parser for delimited text formats

use super::config::TextConfig;
use crate::common::{Error, Result};
use crate::sheet::{Cell, DataType, Records, Row};
use std::iter::Peekable;
use std::str::Chars;

/// Parser for delimited text (CSV, TSV, or any single-character delimiter).
///
/// `\r\n`, `\r` and `\n` all end a line. A field that starts with the quote
/// character runs until its closing quote, across delimiters and line
/// breaks; `""` stands for one literal quote in any field. The outer quotes
/// are dropped only when they wrap the whole field, so `"abc"def` keeps them.
pub struct TextParser<'a> {
    config: &'a TextConfig,
}

impl<'a> TextParser<'a> {
    /// Create a new text parser
    pub fn new(config: &'a TextConfig) -> Self {
        TextParser { config }
    }

    /// Parse the whole input into rows.
    ///
    /// A terminator at the very end of input closes the last row rather than
    /// opening an empty one. Empty lines elsewhere become empty rows.
    pub fn parse(&self, text: &str) -> Result<Records> {
        let quote = self.config.quote;
        let delimiter = self.config.delimiter;

        let mut records = Records::new();
        let mut fields = Row::new();
        let mut field = String::new();
        let mut field_start = true;
        // The current field is wrapped in one outer pair of quotes
        let mut quoted = false;
        // Anything (even a lone delimiter) seen on the current line
        let mut touched = false;
        let mut in_comment = false;
        let mut in_quotes = false;
        let mut line = 1;
        let mut quote_line = 0;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if in_quotes {
                match ch {
                    c if c == quote => {
                        if chars.peek() == Some(&quote) {
                            // Escaped quote (doubled quote)
                            chars.next();
                            field.push(quote);
                        } else {
                            in_quotes = false;
                            if self.closes_field(&mut chars) {
                                quoted = true;
                            } else {
                                field.insert(0, quote);
                                field.push(quote);
                            }
                        }
                    },
                    '\r' | '\n' => {
                        consume_terminator(ch, &mut chars);
                        field.push('\n');
                        line += 1;
                    },
                    _ => field.push(ch),
                }
                continue;
            }

            match ch {
                '\r' | '\n' => {
                    consume_terminator(ch, &mut chars);
                    if !in_comment {
                        records.push(self.finish_row(&mut fields, &mut field, touched, quoted));
                    }
                    in_comment = false;
                    touched = false;
                    field_start = true;
                    quoted = false;
                    line += 1;
                },
                _ if in_comment => {},
                c if !touched && self.config.comment == Some(c) => in_comment = true,
                c if c == quote && field_start => {
                    in_quotes = true;
                    quote_line = line;
                    field_start = false;
                    touched = true;
                },
                c if c == quote => {
                    if chars.peek() == Some(&quote) {
                        chars.next();
                    }
                    field.push(quote);
                    field_start = false;
                    touched = true;
                },
                c if c == delimiter => {
                    fields.push(self.finish_field(std::mem::take(&mut field), quoted));
                    field_start = true;
                    quoted = false;
                    touched = true;
                },
                _ => {
                    field.push(ch);
                    field_start = false;
                    touched = true;
                },
            }
        }

        if in_quotes {
            return Err(Error::UnterminatedQuote { line: quote_line });
        }
        if touched && !in_comment {
            records.push(self.finish_row(&mut fields, &mut field, touched, quoted));
        }

        Ok(records)
    }

    /// Close the current line; an untouched line is an empty row.
    fn finish_row(&self, fields: &mut Row, field: &mut String, touched: bool, quoted: bool) -> Row {
        if touched {
            fields.push(self.finish_field(std::mem::take(field), quoted));
        }
        std::mem::take(fields)
    }

    /// Whether a closing quote ends the field: a delimiter, a line break or
    /// the end of input must follow. With trimming on, blanks in between are
    /// skipped.
    fn closes_field(&self, chars: &mut Peekable<Chars<'_>>) -> bool {
        let delimiter = self.config.delimiter;
        let is_blank = |c: char| (c == ' ' || c == '\t') && c != delimiter;

        let mut ahead = chars.clone();
        if self.config.trim_whitespace {
            while ahead.next_if(|&c| is_blank(c)).is_some() {}
        }
        let closes = match ahead.peek() {
            None => true,
            Some(&c) => c == delimiter || c == '\r' || c == '\n',
        };
        if closes && self.config.trim_whitespace {
            while chars.next_if(|&c| is_blank(c)).is_some() {}
        }
        closes
    }

    /// Turn raw field text into a cell; quoted text is kept as written.
    fn finish_field(&self, mut value: String, quoted: bool) -> Cell {
        if self.config.trim_whitespace && !quoted {
            let trimmed = value.trim();
            if trimmed.len() != value.len() {
                value = trimmed.to_string();
            }
        }

        let data_type = if self.config.infer_types {
            DataType::infer(&value)
        } else {
            DataType::Text
        };
        Cell::with_type(value, data_type)
    }
}

/// Swallow the `\n` of a `\r\n` pair.
fn consume_terminator(ch: char, chars: &mut Peekable<Chars<'_>>) {
    if ch == '\r' && chars.peek() == Some(&'\n') {
        chars.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(records: &Records) -> Vec<Vec<&str>> {
        records
            .iter()
            .map(|row| row.iter().map(Cell::value).collect())
            .collect()
    }

    fn parse(text: &str, config: &TextConfig) -> Records {
        TextParser::new(config).parse(text).unwrap()
    }

    #[test]
    fn test_simple_csv_parsing() {
        let csv = "name,age,city\nJohn,25,New York\nJane,30,London";
        let records = parse(csv, &TextConfig::csv());

        assert_eq!(
            values(&records),
            vec![
                vec!["name", "age", "city"],
                vec!["John", "25", "New York"],
                vec!["Jane", "30", "London"],
            ]
        );
        assert!(records.iter().flatten().all(|c| c.data_type() == DataType::Text));
    }

    #[test]
    fn test_quoted_delimiter_does_not_split() {
        let records = parse("a,\"b,c\",d", &TextConfig::csv());
        assert_eq!(values(&records), vec![vec!["a", "b,c", "d"]]);
    }

    #[test]
    fn test_doubled_quotes() {
        let records = parse("\"he said \"\"hi\"\"\"", &TextConfig::csv());
        assert_eq!(values(&records), vec![vec!["he said \"hi\""]]);

        let records = parse("ab\"\"c,x\"y", &TextConfig::csv());
        assert_eq!(values(&records), vec![vec!["ab\"c", "x\"y"]]);
    }

    #[test]
    fn test_quotes_kept_unless_wrapping_whole_field() {
        let records = parse("\"abc\"def,x", &TextConfig::csv());
        assert_eq!(values(&records), vec![vec!["\"abc\"def", "x"]]);

        let records = parse("\"abc\" ,\"a\"\"b\"c\n\"ok\"", &TextConfig::csv());
        assert_eq!(values(&records), vec![vec!["\"abc\" ", "\"a\"b\"c"], vec!["ok"]]);
    }

    #[test]
    fn test_trimming_keeps_quoted_whitespace() {
        let config = TextConfig::csv().with_trim_whitespace(true);
        let records = parse("\" a \"  ,  b  ,\"c\"d ", &config);
        assert_eq!(values(&records), vec![vec![" a ", "b", "\"c\"d"]]);
    }

    #[test]
    fn test_line_terminators() {
        let records = parse("a\r\nb\rc\nd\r\n", &TextConfig::csv());
        assert_eq!(values(&records), vec![vec!["a"], vec!["b"], vec!["c"], vec!["d"]]);
    }

    #[test]
    fn test_empty_lines_become_empty_rows() {
        let records = parse("a\n\nb\n", &TextConfig::csv());
        assert_eq!(records.len(), 3);
        assert!(records[1].is_empty());

        assert!(parse("", &TextConfig::csv()).is_empty());
        assert_eq!(values(&parse("\"\"", &TextConfig::csv())), vec![vec![""]]);
    }

    #[test]
    fn test_ragged_rows_and_trailing_delimiter() {
        let records = parse("a,b,c\nd\ne,", &TextConfig::csv());
        assert_eq!(values(&records), vec![vec!["a", "b", "c"], vec!["d"], vec!["e", ""]]);
    }

    #[test]
    fn test_multiline_quoted_field() {
        let records = parse("\"line one\r\nline two\",x\ny", &TextConfig::csv());
        assert_eq!(values(&records), vec![vec!["line one\nline two", "x"], vec!["y"]]);
    }

    #[test]
    fn test_unterminated_quote_fails() {
        let err = TextParser::new(&TextConfig::csv())
            .parse("ok\nstill ok,\"never closed\nmore")
            .unwrap_err();
        assert!(matches!(err, Error::UnterminatedQuote { line: 2 }));
    }

    #[test]
    fn test_tsv_vs_csv() {
        let text = "a\tb\nc\td";
        assert_eq!(values(&parse(text, &TextConfig::tsv())), vec![vec!["a", "b"], vec!["c", "d"]]);
        assert_eq!(values(&parse(text, &TextConfig::csv())), vec![vec!["a\tb"], vec!["c\td"]]);
    }

    #[test]
    fn test_comments_and_trimming() {
        let config = TextConfig::csv()
            .with_comment(Some('#'))
            .with_trim_whitespace(true);
        let records = parse("# header note\n a , b \nc,#not a comment", &config);
        assert_eq!(values(&records), vec![vec!["a", "b"], vec!["c", "#not a comment"]]);
    }

    #[test]
    fn test_type_inference() {
        let config = TextConfig::csv().with_infer_types(true);
        let records = parse("42,3.14,true,hello,=A1", &config);
        let types: Vec<_> = records[0].iter().map(Cell::data_type).collect();
        assert_eq!(
            types,
            vec![
                DataType::Number,
                DataType::Number,
                DataType::Logical,
                DataType::Text,
                DataType::Formula,
            ]
        );
    }
}
