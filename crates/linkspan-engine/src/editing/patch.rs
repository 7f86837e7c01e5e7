use std::ops::Range;

use super::mapping::PositionMap;

/// Result of applying a command - the change event consumed by derived
/// state such as link decorations.
///
/// All fields are public so a host can hand-build events for change kinds
/// this crate's plumbing does not generate (e.g. structural changes that
/// move positions without altering text content).
#[derive(Debug, Clone)]
pub struct Patch {
    /// Post-change ranges touched by the edit (deletions appear as empty
    /// ranges at the deletion point).
    pub changed: Vec<Range<usize>>,
    /// Whether text content changed. Downstream this decides rescanning
    /// versus remapping.
    pub text_changed: bool,
    /// Translation from pre-change to post-change byte offsets.
    pub map: PositionMap,
    /// Selection after the change.
    pub new_selection: Range<usize>,
    /// Document version this change produced.
    pub version: u64,
}
