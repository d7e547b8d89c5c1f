//! Functions for one-shot loading and saving.

use crate::common::{Result, decode_text};
use crate::format::{Format, Parser, SheetParser, SheetWriter, Writer};
use crate::io::{FileSink, FileSource};
use crate::sheet::{Document, Sheet};
use std::path::Path;

/// Parse `text` in the format named by `tag` into a new document.
pub fn parse_str(tag: &str, text: &str) -> Result<Document> {
    let mut parser = Parser::new(Format::from_tag(tag)?);
    parser.load_str(text)?;
    Ok(parser.into_document())
}

/// Parse raw bytes, honouring a leading byte order mark.
pub fn parse_bytes(tag: &str, bytes: &[u8]) -> Result<Document> {
    parse_str(tag, &decode_text(bytes)?)
}

/// Open a document from a file path; the format comes from the extension.
pub async fn open_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let mut parser = Parser::new(Format::from_path(path)?);
    parser.read_and_load(&FileSource::new(path)).await?;
    Ok(parser.into_document())
}

/// Serialize `sheet` in the format named by `tag`.
pub fn write_str(tag: &str, sheet: &Sheet) -> Result<String> {
    let mut writer = Writer::new(Format::from_tag(tag)?);
    writer.insert_sheet(sheet.clone());
    writer.write_string()
}

/// Save `sheet` to a file path; the format comes from the extension.
pub fn save_sheet<P: AsRef<Path>>(path: P, sheet: &Sheet) -> Result<()> {
    let path = path.as_ref();
    let mut writer = Writer::new(Format::from_path(path)?);
    writer.insert_sheet(sheet.clone());
    writer.save(&mut FileSink::new(path), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use crate::sheet::Cell;

    #[test]
    fn test_parse_and_write() {
        let doc = parse_str("csv", "a,b\r\n").unwrap();
        let sheet = doc.sheet(1).unwrap();
        assert_eq!(write_str("tsv", sheet).unwrap(), "a\tb\r\n");
        assert!(matches!(parse_str("ods", ""), Err(Error::FiletypeNotSupported(_))));
    }

    #[test]
    fn test_parse_bytes_with_bom() {
        let doc = parse_bytes("tsv", b"\xEF\xBB\xBFx\ty").unwrap();
        assert_eq!(doc.sheet(1).unwrap().cell(1, 1).unwrap().value(), "x");
    }

    #[tokio::test]
    async fn test_save_then_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.html");
        let sheet = Sheet::from_records(vec![vec![Cell::new("1 < 2"), Cell::new("b")]]);

        save_sheet(&path, &sheet).unwrap();
        let doc = open_document(&path).await.unwrap();
        assert_eq!(doc.sheet(1).unwrap(), &sheet);

        let err = open_document(dir.path().join("table.ods")).await.unwrap_err();
        assert!(matches!(err, Error::FiletypeNotSupported(_)));
    }
}
