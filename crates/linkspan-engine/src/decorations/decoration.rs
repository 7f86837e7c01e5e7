use std::ops::Range;

use serde::Serialize;

/// Style class carried by every auto-detected link decoration.
pub const LINK_CLASS: &str = "autolink";

/// A non-owning visual annotation over a byte range of the current
/// document revision.
///
/// Decorations are derived, presentation-only state: they are never
/// written into the document and never serialized with it. The renderer
/// paints the range using `class` without re-running detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoration {
    /// Absolute byte range in the current revision.
    pub range: Range<usize>,
    /// Style tag for the renderer.
    pub class: &'static str,
}

impl Decoration {
    /// An auto-detected link decoration.
    pub fn link(range: Range<usize>) -> Self {
        Self {
            range,
            class: LINK_CLASS,
        }
    }
}

/// The ordered decorations of one document revision.
///
/// Replaced wholesale on every revision change - remapped or rebuilt,
/// never mutated in place - so a reader always observes a complete set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DecorationSet {
    decorations: Vec<Decoration>,
}

impl DecorationSet {
    pub(crate) fn new(decorations: Vec<Decoration>) -> Self {
        debug_assert!(
            decorations
                .windows(2)
                .all(|w| w[0].range.end <= w[1].range.start),
            "decorations must be ordered and disjoint"
        );
        Self { decorations }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decoration> {
        self.decorations.iter()
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }
}

impl<'a> IntoIterator for &'a DecorationSet {
    type Item = &'a Decoration;
    type IntoIter = std::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
