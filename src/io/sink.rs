//! Sinks: where writer output goes.

use crate::common::{Error, Result};
use std::path::{Path, PathBuf};

/// Receiver of serialized output.
pub trait Sink {
    /// Accept `bytes` labelled with `mime_type`.
    ///
    /// Fails with `ErrorWritingFile`.
    fn save(&mut self, bytes: &[u8], mime_type: &str) -> Result<()>;
}

/// Writes output to a file, replacing its contents.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FileSink { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn save(&mut self, bytes: &[u8], _mime_type: &str) -> Result<()> {
        std::fs::write(&self.path, bytes)
            .map_err(|e| Error::ErrorWritingFile(format!("{}: {}", self.path.display(), e)))
    }
}

/// Keeps the last saved output in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    bytes: Vec<u8>,
    mime_type: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }
}

impl Sink for MemorySink {
    fn save(&mut self, bytes: &[u8], mime_type: &str) -> Result<()> {
        self.bytes = bytes.to_vec();
        self.mime_type = Some(mime_type.to_string());
        Ok(())
    }
}
