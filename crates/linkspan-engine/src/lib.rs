pub mod decorations;
pub mod editing;
pub mod links;
pub mod parsing;

// Re-export key types for easier usage
pub use decorations::{Decoration, DecorationSet, LINK_CLASS, LinkDecorator};
pub use editing::{Bias, Cmd, Document, EditError, Patch, PositionMap, TextBlock};
pub use links::{DomainValidator, HostnameValidator, LinkScanner, LinkSpan, scan_links};
