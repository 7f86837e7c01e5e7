pub mod blocks;
pub mod rope;

use xi_rope::Rope;

use blocks::{BlockBuilder, BlockNode, LineClassifier};
use rope::lines_with_spans;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// Segments the buffer into blocks (paragraphs and fenced code).
pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}
