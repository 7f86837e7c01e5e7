use xi_rope::Rope;

use super::span::Span;

/// A single line of the buffer with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line (includes the newline if present).
    pub span: Span,
    /// The line text, newline included.
    pub text: String,
}

/// Iterates the buffer line by line, tracking byte spans.
///
/// `lines_raw` preserves newline characters, which keeps the running offset
/// exact for span tracking during block segmentation.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
