use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceKind},
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone, Copy)]
enum LeafState {
    None,
    Paragraph {
        start: usize,
        last_content_end: usize,
    },
    Fence {
        kind: FenceKind,
        start: usize,
        last_line_end: usize,
    },
}

/// Folds classified lines into a flat sequence of [`BlockNode`]s.
///
/// Paragraphs are blank-line separated runs of text lines; fences stay open
/// until a matching closer (or EOF, which emits the unterminated fence).
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        if let Some(open) = try_open_leaf(c) {
            self.flush_paragraph();
            self.open_leaf(open, c.line);
            return;
        }

        self.extend_paragraph(c);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_paragraph();
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn open_leaf(&mut self, open: BlockOpen, line: Span) {
        match open {
            BlockOpen::FencedCode { kind } => {
                self.leaf = LeafState::Fence {
                    kind,
                    start: line.start,
                    last_line_end: line.end,
                }
            }
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let (kind, start, _last_end) = match self.leaf {
            LeafState::Fence {
                kind,
                start,
                last_line_end,
            } => (kind, start, last_line_end),
            _ => return,
        };

        self.leaf = LeafState::Fence {
            kind,
            start,
            last_line_end: c.line.end,
        };

        // Close if this line looks like a fence with the same sig.
        if CodeFence::closes(kind, c.fence_sig) {
            let span = Span {
                start,
                end: c.line.end,
            };
            self.out.push(BlockNode {
                kind: BlockKind::FencedCode { kind },
                span,
                content_span: span,
            });
            self.leaf = LeafState::None;
        }
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        match self.leaf {
            LeafState::Paragraph { start, .. } => {
                self.leaf = LeafState::Paragraph {
                    start,
                    last_content_end: c.content.end,
                };
            }
            _ => {
                self.leaf = LeafState::Paragraph {
                    start: c.line.start,
                    last_content_end: c.content.end,
                };
            }
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph {
            start,
            last_content_end,
        } = prev
        {
            let span = Span {
                start,
                end: last_content_end,
            };
            self.out.push(BlockNode {
                kind: BlockKind::Paragraph,
                span,
                content_span: span,
            });
        } else {
            self.leaf = prev; // put back non-paragraph leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            kind,
            start,
            last_line_end,
        } = prev
        {
            // Unterminated fence: emit as fence block anyway
            let span = Span {
                start,
                end: last_line_end,
            };
            self.out.push(BlockNode {
                kind: BlockKind::FencedCode { kind },
                span,
                content_span: span,
            });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
