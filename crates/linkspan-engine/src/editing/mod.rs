/*!
 * # Editing Module
 *
 * Host-side document plumbing: the smallest editing surface that can drive
 * the link decoration pipeline.
 *
 * ## Architecture
 *
 * ### 1. Single Source of Truth: xi-rope Buffer
 * - The entire document is stored in a single `xi_rope::Rope` buffer
 * - Edits are expressed as **Delta** values and applied atomically
 * - Block segmentation is derived from the buffer after every text change
 *
 * ### 2. Command-Based Editing
 * - All edits are **Commands** (`Cmd` enum) that compile to Deltas
 * - Malformed commands (out of bounds, splitting a UTF-8 scalar) are
 *   rejected with an `EditError` before anything is mutated
 *
 * ### 3. Change Events
 * - Every applied command bumps the revision counter and yields a `Patch`:
 *   whether text changed, the touched ranges, the new selection, and a
 *   `PositionMap` translating pre-change offsets to post-change offsets
 * - Consumers holding positions into the document (selections, link
 *   decorations) either remap through the `PositionMap` or re-derive from
 *   the new buffer; the map reports positions that were deleted outright
 *
 * ## Module Structure
 *
 * - **`document`**: `Document` with the rope buffer, selection, revision
 *   counter, and text-block enumeration
 * - **`commands`**: `Cmd` enum, delta compilation, `EditError`
 * - **`mapping`**: `PositionMap` and `Bias` for offset translation
 * - **`patch`**: the `Patch` change event
 */

pub mod commands;
pub mod document;
pub mod mapping;
pub mod patch;

pub use commands::{Cmd, EditError};
pub use document::{Document, TextBlock};
pub use mapping::{Bias, PositionMap};
pub use patch::Patch;
