//! Byte Order Mark (BOM) handling for byte sources.
//!
//! Byte sources hand over raw bytes; this module detects a leading BOM and
//! decodes the payload into the text the codecs consume.

use crate::common::{Error, Result};
use log::warn;

/// Supported BOM encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl BomKind {
    /// Returns the byte representation of the BOM.
    #[inline]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            BomKind::Utf8 => &UTF8_BOM,
            BomKind::Utf16Le => &UTF16_LE_BOM,
            BomKind::Utf16Be => &UTF16_BE_BOM,
            BomKind::Utf32Le => &UTF32_LE_BOM,
            BomKind::Utf32Be => &UTF32_BE_BOM,
        }
    }

    /// Returns the length in bytes of the BOM.
    #[inline]
    #[allow(clippy::len_without_is_empty)] // No need to check for empty BOMs
    pub const fn len(&self) -> usize {
        self.as_bytes().len()
    }
}

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// UTF-16 little-endian BOM bytes.
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
/// UTF-16 big-endian BOM bytes.
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
/// UTF-32 little-endian BOM bytes.
pub const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
/// UTF-32 big-endian BOM bytes.
pub const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];

/// Detects a BOM at the start of `bytes`.
///
/// UTF-32 marks are checked first since the UTF-32 LE mark begins with the
/// UTF-16 LE one.
pub fn detect_bom(bytes: &[u8]) -> Option<BomKind> {
    [
        BomKind::Utf32Be,
        BomKind::Utf32Le,
        BomKind::Utf8,
        BomKind::Utf16Be,
        BomKind::Utf16Le,
    ]
    .into_iter()
    .find(|kind| bytes.starts_with(kind.as_bytes()))
}

/// Decodes raw source bytes into text.
///
/// A UTF-8 BOM is stripped, UTF-16 input is transcoded, and input without a
/// BOM must be valid UTF-8. Anything else fails with `ErrorReadingFile`.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    match detect_bom(bytes) {
        Some(BomKind::Utf8) => utf8(&bytes[UTF8_BOM.len()..]),
        Some(kind @ (BomKind::Utf16Le | BomKind::Utf16Be)) => {
            warn!("decoding {:?} input", kind);
            let encoding = if kind == BomKind::Utf16Le {
                encoding_rs::UTF_16LE
            } else {
                encoding_rs::UTF_16BE
            };
            let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[kind.len()..]);
            if had_errors {
                return Err(Error::ErrorReadingFile(format!(
                    "invalid {} sequence in input",
                    encoding.name()
                )));
            }
            Ok(text.into_owned())
        },
        Some(kind) => Err(Error::ErrorReadingFile(format!(
            "unsupported text encoding {:?}",
            kind
        ))),
        None => utf8(bytes),
    }
}

fn utf8(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| Error::ErrorReadingFile(format!("input is not valid UTF-8: {}", e)))
}
