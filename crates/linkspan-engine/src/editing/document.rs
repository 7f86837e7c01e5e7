use std::ops::Range;

use xi_rope::Rope;

use crate::parsing::blocks::BlockNode;
use crate::parsing::parse_document;
use crate::parsing::rope::{Span, slice_to_string};

use super::commands::{Cmd, EditError, compile_command};
use super::mapping::PositionMap;
use super::patch::Patch;

/// One scannable unit of the document: a paragraph's flattened text
/// together with its absolute content span.
#[derive(Debug, Clone)]
pub struct TextBlock {
    /// Absolute byte span of the text within the document.
    pub span: Span,
    /// The flattened text content.
    pub text: String,
}

/// The host-side document: a rope buffer, a byte-range selection, a
/// monotonically increasing revision counter, and the derived block
/// segmentation.
///
/// The rope is the single source of truth for text. Every command compiles
/// to a delta which is applied atomically; blocks are re-derived from the
/// updated buffer and the change is described to consumers as a [`Patch`].
/// The document itself never stores derived annotations - decorations live
/// in their own side table keyed to the revision counter.
pub struct Document {
    buffer: Rope,
    selection: Range<usize>,
    version: u64,
    blocks: Vec<BlockNode>,
}

impl Document {
    /// Creates a document from raw bytes. Fails only on invalid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        let buffer = Rope::from(text);
        let len = buffer.len();
        let blocks = parse_document(&buffer).blocks;

        Ok(Self {
            buffer,
            selection: len..len,
            version: 0,
            blocks,
        })
    }

    /// Applies a command to the document.
    ///
    /// Text-changing commands apply their delta to the buffer and
    /// re-segment the blocks; `SetSelection` only moves the selection. The
    /// version is bumped either way, and the returned [`Patch`] tells
    /// consumers whether text changed and how positions moved.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        let delta = compile_command(self, &cmd)?;

        let (map, text_changed) = match delta {
            Some(delta) => {
                let map = PositionMap::from_delta(&delta);
                self.buffer = delta.apply(&self.buffer);
                self.blocks = parse_document(&self.buffer).blocks;
                (map, true)
            }
            None => (PositionMap::identity(), false),
        };

        self.selection = match &cmd {
            Cmd::SetSelection { range } => range.clone(),
            _ => map.map_clamping(self.selection.start)..map.map_clamping(self.selection.end),
        };
        self.version += 1;

        Ok(Patch {
            changed: map.changed_ranges(),
            text_changed,
            map,
            new_selection: self.selection.clone(),
            version: self.version,
        })
    }

    /// The current text content.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// The current revision.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The current selection range.
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// The current block segmentation.
    pub fn blocks(&self) -> &[BlockNode] {
        &self.blocks
    }

    /// Iterates the blocks that participate in link scanning (paragraphs),
    /// yielding each one's absolute content span and flattened text.
    pub fn text_blocks(&self) -> impl Iterator<Item = TextBlock> + '_ {
        self.blocks
            .iter()
            .filter(|b| b.kind.is_text_block())
            .map(|b| TextBlock {
                span: b.content_span,
                text: slice_to_string(&self.buffer, b.content_span),
            })
    }

    /// Buffer length in bytes.
    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_bytes_valid_utf8() {
        let text = "hello world\n\nsecond paragraph";
        let doc = Document::from_bytes(text.as_bytes()).unwrap();

        assert_eq!(doc.text(), text);
        assert_eq!(doc.version(), 0);
        assert_eq!(doc.selection(), text.len()..text.len());
        assert_eq!(doc.blocks().len(), 2);
    }

    #[test]
    fn from_bytes_invalid_utf8() {
        assert!(Document::from_bytes(&[0xFF, 0xFE, 0xFD]).is_err());
    }

    #[test]
    fn insert_text_updates_buffer_and_version() {
        let mut doc = Document::from_bytes(b"hello world").unwrap();

        let patch = doc
            .apply(Cmd::InsertText {
                at: 5,
                text: " there".to_string(),
            })
            .unwrap();

        assert_eq!(doc.text(), "hello there world");
        assert_eq!(doc.version(), 1);
        assert!(patch.text_changed);
        assert_eq!(patch.version, 1);
        assert_eq!(patch.changed, vec![5..11]);
    }

    #[test]
    fn delete_range_updates_buffer() {
        let mut doc = Document::from_bytes(b"hello world").unwrap();

        let patch = doc.apply(Cmd::DeleteRange { range: 5..11 }).unwrap();

        assert_eq!(doc.text(), "hello");
        assert!(patch.text_changed);
        assert_eq!(patch.changed, vec![5..5]);
    }

    #[test]
    fn replace_range_updates_buffer() {
        let mut doc = Document::from_bytes(b"hello world").unwrap();

        doc.apply(Cmd::ReplaceRange {
            range: 6..11,
            text: "there".to_string(),
        })
        .unwrap();

        assert_eq!(doc.text(), "hello there");
    }

    #[test]
    fn set_selection_is_text_preserving() {
        let mut doc = Document::from_bytes(b"hello world").unwrap();

        let patch = doc.apply(Cmd::SetSelection { range: 2..5 }).unwrap();

        assert_eq!(doc.text(), "hello world");
        assert_eq!(doc.selection(), 2..5);
        assert_eq!(doc.version(), 1);
        assert!(!patch.text_changed);
        assert!(patch.map.is_identity());
        assert!(patch.changed.is_empty());
    }

    #[test]
    fn selection_follows_edits() {
        let mut doc = Document::from_bytes(b"hello world").unwrap();
        doc.apply(Cmd::SetSelection { range: 6..11 }).unwrap();

        doc.apply(Cmd::InsertText {
            at: 0,
            text: ">> ".to_string(),
        })
        .unwrap();

        assert_eq!(doc.selection(), 9..14);
    }

    #[test]
    fn out_of_bounds_edit_is_rejected() {
        let mut doc = Document::from_bytes(b"short").unwrap();

        let err = doc.apply(Cmd::DeleteRange { range: 2..99 }).unwrap_err();
        assert!(matches!(err, EditError::OutOfBounds { .. }));

        // The failed command must leave the document untouched.
        assert_eq!(doc.text(), "short");
        assert_eq!(doc.version(), 0);
    }

    #[test]
    fn non_char_boundary_edit_is_rejected() {
        let mut doc = Document::from_bytes("héllo".as_bytes()).unwrap();

        // 'é' occupies bytes 1..3, so 2 splits it.
        let err = doc
            .apply(Cmd::InsertText {
                at: 2,
                text: "x".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, EditError::NotCharBoundary(2)));
        assert_eq!(doc.text(), "héllo");
    }

    #[test]
    fn text_blocks_skip_code_fences() {
        let text = "first para\n\n```\nexample.com in code\n```\n\nsecond para";
        let doc = Document::from_bytes(text.as_bytes()).unwrap();

        let blocks: Vec<TextBlock> = doc.text_blocks().collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "first para");
        assert_eq!(blocks[1].text, "second para");

        // Spans point back into the document.
        for b in &blocks {
            assert_eq!(&text[b.span.start..b.span.end], b.text);
        }
    }

    #[test]
    fn text_blocks_flatten_multiline_paragraphs() {
        let doc = Document::from_bytes(b"line one\nline two\n\nother").unwrap();

        let blocks: Vec<TextBlock> = doc.text_blocks().collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "line one\nline two");
        assert_eq!(blocks[1].text, "other");
    }

    #[test]
    fn edits_reshape_blocks() {
        let mut doc = Document::from_bytes(b"one long paragraph").unwrap();
        assert_eq!(doc.text_blocks().count(), 1);

        // Splitting with a blank line yields two paragraphs.
        doc.apply(Cmd::InsertText {
            at: 3,
            text: "\n\n".to_string(),
        })
        .unwrap();
        assert_eq!(doc.text_blocks().count(), 2);
    }
}
