//! Delimited-text codec: parsing files into datasets and writing them
//! back out.

mod parser;
mod source;
mod writer;

pub use parser::{Parser, ParserConfig};
pub use source::SourceMetadata;
pub use writer::Writer;
