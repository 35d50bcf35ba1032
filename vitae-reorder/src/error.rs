//! Reorder error types.

use thiserror::Error;
use vitae_types::{SectionId, SectionKind};

/// Result type for reorder operations.
pub type ReorderResult<T> = Result<T, ReorderError>;

/// Errors that can occur while reordering sections.
///
/// Invalid drops (no target, or dropping an item on itself) are not errors;
/// they resolve to no-ops upstream of this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReorderError {
    #[error("a drag session is already active")]
    DragInProgress,

    #[error("no drag session is active")]
    NoActiveDrag,

    #[error("section {0} is not in the store")]
    UnknownSection(SectionId),

    #[error("no {0} group is present")]
    UnknownGroup(SectionKind),

    #[error("replacement order does not match group membership: {0}")]
    OrderMismatch(String),
}
