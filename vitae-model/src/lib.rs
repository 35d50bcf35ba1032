//! Core section model for the vitae resume engine.
//!
//! Defines the types the reordering core and its hosts share:
//! - [`Section`] — the atomic orderable unit (id, kind, JSON payload)
//! - [`SectionRenderer`] — the trait a presentation layer implements to turn
//!   a section into output the core treats as opaque
//! - [`Rendered`] — the renderer's per-section result
//!
//! The reordering engine never looks inside `Section::data`; payload shape is
//! a contract between the remote API and the renderer.

mod renderer;
mod section;

pub use renderer::{Rendered, SectionRenderer};
pub use section::Section;
