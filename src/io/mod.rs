//! External collaborators: byte sources feeding parsers and sinks
//! receiving writer output.

mod sink;
mod source;

pub use sink::{FileSink, MemorySink, Sink};
pub use source::{ByteSource, FileSource, MemorySource, read_and_load};
