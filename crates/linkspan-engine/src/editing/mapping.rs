use std::ops::Range;

use xi_rope::delta::DeltaElement;
use xi_rope::{Delta, RopeInfo};

/// Which side of an insertion a mapped position lands on when it sits
/// exactly at the insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    /// Stay before the inserted text.
    Before,
    /// Move past the inserted text.
    After,
}

/// One replaced region: `old_len` bytes at `old_start` (pre-change
/// coordinates) became `new_len` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MapEdit {
    old_start: usize,
    old_len: usize,
    new_len: usize,
}

/// Translates pre-change byte offsets into post-change byte offsets.
///
/// Built by walking an edit's [`Delta`]: gaps between copied regions are
/// deletions, inserted nodes add new length at the current point, and
/// adjacent pieces merge into one replaced region. A position strictly
/// inside a replaced region no longer exists after the change and maps to
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionMap {
    edits: Vec<MapEdit>,
}

impl PositionMap {
    /// The map of a change that moved nothing.
    pub fn identity() -> Self {
        Self::default()
    }

    /// True if every position maps to itself.
    pub fn is_identity(&self) -> bool {
        self.edits.is_empty()
    }

    /// Derives the map from a delta over the pre-change document.
    pub fn from_delta(delta: &Delta<RopeInfo>) -> Self {
        let mut edits: Vec<MapEdit> = Vec::new();
        let mut old_pos = 0;

        fn push(edits: &mut Vec<MapEdit>, edit: MapEdit) {
            if let Some(last) = edits.last_mut() {
                if last.old_start + last.old_len == edit.old_start {
                    last.old_len += edit.old_len;
                    last.new_len += edit.new_len;
                    return;
                }
            }
            edits.push(edit);
        }

        for el in &delta.els {
            match el {
                DeltaElement::Copy(from, to) => {
                    if old_pos < *from {
                        push(
                            &mut edits,
                            MapEdit {
                                old_start: old_pos,
                                old_len: from - old_pos,
                                new_len: 0,
                            },
                        );
                    }
                    old_pos = *to;
                }
                DeltaElement::Insert(node) => {
                    push(
                        &mut edits,
                        MapEdit {
                            old_start: old_pos,
                            old_len: 0,
                            new_len: node.len(),
                        },
                    );
                }
            }
        }
        if old_pos < delta.base_len {
            push(
                &mut edits,
                MapEdit {
                    old_start: old_pos,
                    old_len: delta.base_len - old_pos,
                    new_len: 0,
                },
            );
        }

        Self { edits }
    }

    /// Maps a pre-change offset to its post-change offset.
    ///
    /// Returns `None` when the position fell strictly inside a replaced
    /// region. `bias` decides the side of a pure insertion at exactly
    /// `pos`; a replacement boundary always maps to the replacement start.
    pub fn map(&self, pos: usize, bias: Bias) -> Option<usize> {
        let mut diff: isize = 0;
        for e in &self.edits {
            if pos < e.old_start {
                break;
            }
            if pos == e.old_start {
                let base = (pos as isize + diff) as usize;
                return Some(if e.old_len == 0 && bias == Bias::After {
                    base + e.new_len
                } else {
                    base
                });
            }
            let old_end = e.old_start + e.old_len;
            if pos < old_end {
                return None;
            }
            diff += e.new_len as isize - e.old_len as isize;
        }
        Some((pos as isize + diff) as usize)
    }

    /// Lenient mapping for positions that must always land somewhere, such
    /// as selection endpoints: a position in a replaced region resolves to
    /// the end of the replacement text.
    pub fn map_clamping(&self, pos: usize) -> usize {
        let mut diff: isize = 0;
        for e in &self.edits {
            if pos < e.old_start {
                break;
            }
            let old_end = e.old_start + e.old_len;
            if pos <= old_end {
                return (e.old_start as isize + diff) as usize + e.new_len;
            }
            diff += e.new_len as isize - e.old_len as isize;
        }
        (pos as isize + diff) as usize
    }

    /// Post-change ranges touched by the change, in post-change
    /// coordinates. Deletions appear as empty ranges at the deletion point.
    pub fn changed_ranges(&self) -> Vec<Range<usize>> {
        let mut out = Vec::with_capacity(self.edits.len());
        let mut diff: isize = 0;
        for e in &self.edits {
            let start = (e.old_start as isize + diff) as usize;
            out.push(start..start + e.new_len);
            diff += e.new_len as isize - e.old_len as isize;
        }
        out
    }
}
