//! Grouped section reordering engine for the vitae resume editor.
//!
//! This crate is the core of section rearrangement:
//!
//! - [`group_sections`] — pure partition of the flat section list into
//!   kind-groups, in first-occurrence order
//! - [`DragSession`] — the one-at-a-time drag state machine
//! - [`resolve_intra_drop`] / [`resolve_inter_drop`] — turn a completed drop
//!   into a local permutation (array-move, never swap)
//! - [`apply_member_order`] / [`apply_group_order`] — the order reconciler:
//!   merge a local permutation back into one flat list
//! - [`SectionStore`] — the single-owner ordered list with an id index and
//!   change notification
//! - [`EditorSession`] — glue for one resume: store + drag session +
//!   persistence gateway, with optimistic local updates
//!
//! The engine is a pure state machine over section data; all I/O lives
//! behind the persistence gateway. Every reorder is a permutation: the
//! multiset of section ids never changes.

mod arrange;
mod editor;
mod engine;
mod error;
mod geometry;
mod grouping;
mod reconcile;
mod session;
mod store;

pub use arrange::array_move;
pub use editor::EditorSession;
pub use engine::{resolve_inter_drop, resolve_intra_drop};
pub use error::{ReorderError, ReorderResult};
pub use geometry::{Rect, clamp_to_parent, closest_center, restrict_to_vertical_axis};
pub use grouping::{Grouped, group_sections};
pub use reconcile::{apply_group_order, apply_member_order};
pub use session::{DragSession, DragTarget};
pub use store::SectionStore;
