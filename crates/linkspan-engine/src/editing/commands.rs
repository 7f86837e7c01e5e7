use std::ops::Range;

use xi_rope::delta::Builder;
use xi_rope::{Delta, Rope, RopeInfo};

use super::document::Document;

/// Host edit commands.
///
/// Deliberately small: just enough to produce both text-changing and
/// text-preserving change events. A full editing vocabulary belongs to the
/// host editor, not to this engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Insert `text` at byte offset `at`.
    InsertText { at: usize, text: String },
    /// Delete a byte range.
    DeleteRange { range: Range<usize> },
    /// Replace a byte range with `text`.
    ReplaceRange { range: Range<usize>, text: String },
    /// Move the selection without touching text.
    SetSelection { range: Range<usize> },
}

/// Failure to apply a command to a document.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("range {start}..{end} out of bounds for document of {len} bytes")]
    OutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("offset {0} is not a char boundary")]
    NotCharBoundary(usize),
}

/// Compiles a text-changing command into a delta over the current buffer.
/// `SetSelection` carries no text change and compiles to `None`.
pub(crate) fn compile_command(
    doc: &Document,
    cmd: &Cmd,
) -> Result<Option<Delta<RopeInfo>>, EditError> {
    let (range, text) = match cmd {
        Cmd::InsertText { at, text } => (*at..*at, text.as_str()),
        Cmd::DeleteRange { range } => (range.clone(), ""),
        Cmd::ReplaceRange { range, text } => (range.clone(), text.as_str()),
        Cmd::SetSelection { range } => {
            validate_range(doc, range)?;
            return Ok(None);
        }
    };
    validate_range(doc, &range)?;

    let mut builder = Builder::new(doc.len());
    if !range.is_empty() || !text.is_empty() {
        if text.is_empty() {
            builder.delete(range);
        } else {
            builder.replace(range, Rope::from(text));
        }
    }
    Ok(Some(builder.build()))
}

/// Rejects ranges the rope would panic on: out of bounds or splitting a
/// UTF-8 scalar value.
fn validate_range(doc: &Document, range: &Range<usize>) -> Result<(), EditError> {
    let len = doc.len();
    if range.start > range.end || range.end > len {
        return Err(EditError::OutOfBounds {
            start: range.start,
            end: range.end,
            len,
        });
    }

    let text = doc.text();
    for at in [range.start, range.end] {
        if !text.is_char_boundary(at) {
            return Err(EditError::NotCharBoundary(at));
        }
    }
    Ok(())
}
