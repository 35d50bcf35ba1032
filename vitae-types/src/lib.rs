//! Core type definitions for the vitae resume engine.
//!
//! This crate defines the fundamental, renderer-agnostic types used
//! throughout the core:
//! - Section and resume identifiers (opaque strings, UUID v7 when minted here)
//! - The closed set of section kinds that drive grouping
//!
//! Domain payloads (the shape of an education entry, an experience entry,
//! etc.) belong to their renderers, not here.

mod ids;
mod kind;

pub use ids::{ResumeId, SectionId};
pub use kind::SectionKind;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown section kind: {0}")]
    UnknownKind(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
