use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{CodeFence, FenceSig};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block segmentation: each line is classified
/// independently without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the buffer.
    pub line: Span,
    /// Byte span of the line without its trailing newline.
    pub content: Span,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
}

/// Classifies individual lines for the block segmentation phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let trimmed = lr.text.trim_end_matches(['\r', '\n']);

        LineClass {
            line: lr.span,
            content: Span {
                start: lr.span.start,
                end: lr.span.start + trimmed.len(),
            },
            is_blank: trimmed.trim().is_empty(),
            fence_sig: CodeFence::sig(trimmed),
        }
    }
}
