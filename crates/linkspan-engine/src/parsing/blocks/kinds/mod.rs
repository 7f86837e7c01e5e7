//! Block-specific types that own their syntax delimiters.
//!
//! All delimiter constants live here, not scattered in classifier code.
//! The classifier calls these constants; it never hardcodes ``` or ~~~.

pub mod code_fence;
pub mod paragraph;

pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use paragraph::Paragraph;
