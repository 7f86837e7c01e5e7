use crate::editing::{Bias, Document, Patch, PositionMap};
use crate::links::{DomainValidator, HostnameValidator, scan_links};

use super::decoration::{Decoration, DecorationSet};

/// Keeps a [`DecorationSet`] of auto-detected links in step with a live
/// document.
///
/// One instance per document. On every change event the set is replaced
/// wholesale: a text change rebuilds it by rescanning every text block,
/// anything else remaps the previous positions through the event's map.
/// Rescanning is O(document text); remapping is O(decorations), which is
/// why text-preserving events (selection moves, formatting) take the cheap
/// path.
pub struct LinkDecorator<V = HostnameValidator> {
    validator: V,
    set: DecorationSet,
    revision: u64,
}

impl LinkDecorator {
    /// Attaches to a document with the default hostname validator.
    pub fn attach(doc: &Document) -> Self {
        Self::with_validator(doc, HostnameValidator)
    }
}

impl<V: DomainValidator> LinkDecorator<V> {
    /// Attaches to a document with a custom domain validator.
    pub fn with_validator(doc: &Document, validator: V) -> Self {
        let set = recompute(doc, &validator);
        Self {
            validator,
            set,
            revision: doc.version(),
        }
    }

    /// The decorations of the last seen revision.
    pub fn decorations(&self) -> &DecorationSet {
        &self.set
    }

    /// The document version the current set was computed against.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Handles one change event.
    ///
    /// A patch that is not the direct successor of the tracked revision
    /// cannot be remapped through safely (events were missed), so it falls
    /// back to a rebuild.
    pub fn apply(&mut self, doc: &Document, patch: &Patch) {
        self.set = if patch.text_changed || patch.version != self.revision + 1 {
            recompute(doc, &self.validator)
        } else {
            remap(&self.set, &patch.map)
        };
        self.revision = patch.version;
    }
}

/// Rebuilds the set from scratch: scan every text block and shift each
/// block-relative span to absolute document positions.
fn recompute<V: DomainValidator>(doc: &Document, validator: &V) -> DecorationSet {
    let mut decorations = Vec::new();
    for block in doc.text_blocks() {
        for link in scan_links(&block.text, validator) {
            decorations.push(Decoration::link(
                block.span.absolute(link.from)..block.span.absolute(link.to),
            ));
        }
    }
    DecorationSet::new(decorations)
}

/// Translates every decoration through the change's map. A decoration
/// whose anchor was deleted, or whose range collapses, drops out silently.
fn remap(set: &DecorationSet, map: &PositionMap) -> DecorationSet {
    let mut out = Vec::with_capacity(set.len());
    for d in set {
        let Some(start) = map.map(d.range.start, Bias::After) else {
            continue;
        };
        let Some(end) = map.map(d.range.end, Bias::Before) else {
            continue;
        };
        if start < end {
            out.push(Decoration {
                range: start..end,
                class: d.class,
            });
        }
    }
    DecorationSet::new(out)
}
