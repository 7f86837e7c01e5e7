//! # Link Decorations
//!
//! Derived, versioned link annotations over the document.
//!
//! Decorations form a side table keyed to the document's revision counter,
//! never fields on the document itself: auto-detected formatting must not
//! leak into persisted content. [`LinkDecorator`] owns the table and
//! replaces it on every change event - rebuilding when text changed,
//! remapping positions otherwise.
//!
//! ## Modules
//!
//! - **`decoration`**: `Decoration`, `DecorationSet`, `LINK_CLASS`
//! - **`sync`**: `LinkDecorator`, the recompute-or-remap state machine

pub mod decoration;
pub mod sync;

pub use decoration::{Decoration, DecorationSet, LINK_CLASS};
pub use sync::LinkDecorator;
