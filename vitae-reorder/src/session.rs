//! The drag session state machine.
//!
//! At most one drag is in progress at a time, for the whole editor: either a
//! section moving within its group, or a whole group moving among groups.
//! That exclusivity is the concurrency model — transitions only go
//! `Idle -> {IntraGroup, InterGroup} -> Idle`, and a second `begin_*` while
//! active is rejected. Sessions are ephemeral and never persisted.

use crate::error::{ReorderError, ReorderResult};
use vitae_types::{SectionId, SectionKind};

/// What the pointer is currently hovering over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    Section(SectionId),
    Group(SectionKind),
}

/// Ephemeral state of one in-progress reorder gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession {
    /// No drag in progress.
    #[default]
    Idle,
    /// A section is lifted within its group.
    IntraGroup {
        kind: SectionKind,
        active: SectionId,
        over: Option<SectionId>,
    },
    /// A whole group is lifted.
    InterGroup {
        active: SectionKind,
        over: Option<SectionKind>,
    },
}

impl DragSession {
    /// Returns true if no drag is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, DragSession::Idle)
    }

    /// Lifts a section belonging to the given group.
    pub fn begin_intra(&mut self, kind: SectionKind, active: SectionId) -> ReorderResult<()> {
        if !self.is_idle() {
            return Err(ReorderError::DragInProgress);
        }
        *self = DragSession::IntraGroup {
            kind,
            active,
            over: None,
        };
        Ok(())
    }

    /// Lifts a whole group.
    pub fn begin_inter(&mut self, active: SectionKind) -> ReorderResult<()> {
        if !self.is_idle() {
            return Err(ReorderError::DragInProgress);
        }
        *self = DragSession::InterGroup { active, over: None };
        Ok(())
    }

    /// Updates the hovered target.
    ///
    /// A target of the wrong shape for the active session (a group target
    /// during a section drag, or vice versa) clears `over` instead of
    /// erroring: those drops are benign no-ops, not failures.
    pub fn set_over(&mut self, target: Option<DragTarget>) -> ReorderResult<()> {
        match self {
            DragSession::Idle => Err(ReorderError::NoActiveDrag),
            DragSession::IntraGroup { over, .. } => {
                *over = match target {
                    Some(DragTarget::Section(id)) => Some(id),
                    _ => None,
                };
                Ok(())
            }
            DragSession::InterGroup { over, .. } => {
                *over = match target {
                    Some(DragTarget::Group(kind)) => Some(kind),
                    _ => None,
                };
                Ok(())
            }
        }
    }

    /// Abandons the gesture with no mutation.
    pub fn cancel(&mut self) {
        *self = DragSession::Idle;
    }

    /// Takes the session for drop resolution, leaving `Idle` behind.
    #[must_use]
    pub fn take(&mut self) -> DragSession {
        std::mem::take(self)
    }
}
