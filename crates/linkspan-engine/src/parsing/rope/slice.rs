use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the buffer as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}
