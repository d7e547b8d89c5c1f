//! Unified error types for tabula.
//!
//! Every codec, accessor and collaborator reports through the single
//! [`Error`] enum defined here.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
