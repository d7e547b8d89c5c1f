//! Byte sources: where parser input comes from.

use crate::common::{Error, Result, decode_text};
use crate::format::SheetParser;
use crate::sheet::Document;
use log::debug;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Asynchronous provider of input text.
pub trait ByteSource {
    /// File name used for the extension check, if the source has one.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Read the whole source as text.
    ///
    /// Fails with `FileNotFound` or `ErrorReadingFile`.
    fn read_to_text(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Read `source` and load its text into the first sheet of `parser`.
///
/// The extension check runs before any bytes are read. Failures are
/// returned through the same `Result` as success; the document is only
/// touched once the full text has arrived and parsed.
pub async fn read_and_load<'a, P, S>(parser: &'a mut P, source: &S) -> Result<&'a Document>
where
    P: SheetParser,
    S: ByteSource,
{
    if parser.checks_extension()
        && let Some(name) = source.name()
    {
        parser.format().check_extension(name)?;
    }

    let text = source.read_to_text().await?;
    debug!("read {} bytes of {} input", text.len(), parser.format());
    parser.load_str(&text)?;
    Ok(parser.document())
}

/// A file on the local file system.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: Option<String>,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string);
        FileSource { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileSource {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    async fn read_to_text(&self) -> Result<String> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::FileNotFound(self.path.display().to_string()),
            _ => Error::ErrorReadingFile(format!("{}: {}", self.path.display(), e)),
        })?;
        decode_text(&bytes)
    }
}

/// Bytes already in memory, optionally carrying a file name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: Option<String>,
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        MemorySource {
            name: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl ByteSource for MemorySource {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    async fn read_to_text(&self) -> Result<String> {
        decode_text(&self.bytes)
    }
}
