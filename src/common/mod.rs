//! Common types and utilities shared across codecs.
//!
//! This module provides the unified error type, byte order mark handling
//! for byte sources, and XML escaping used by the markup codecs.

// Submodule declarations
pub mod bom;
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use bom::{BomKind, decode_text, detect_bom};
pub use error::{Error, Result};
