//! Drop resolution: turn a completed gesture into a local permutation.
//!
//! Both resolvers are pure. They return `None` for every benign no-op case
//! (no target, self-drop, or an id that is not a member of the list being
//! reordered) so callers skip reconciliation and persistence entirely.

use crate::arrange::array_move;
use vitae_model::Section;
use vitae_types::{SectionId, SectionKind};

/// Resolves an intra-group drop into the group's new member order.
///
/// `members` is the dragged section's group, in current order. The active
/// section is removed from its old position and inserted at the target's
/// position; everything between shifts one slot. Targets outside the group
/// resolve to `None` — cross-group drops are invalid.
#[must_use]
pub fn resolve_intra_drop(
    members: &[Section],
    active: &SectionId,
    over: Option<&SectionId>,
) -> Option<Vec<SectionId>> {
    let over = over?;
    if active == over {
        return None;
    }

    let from = members.iter().position(|s| &s.id == active)?;
    let to = members.iter().position(|s| &s.id == over)?;

    let mut order: Vec<SectionId> = members.iter().map(|s| s.id.clone()).collect();
    array_move(&mut order, from, to);
    Some(order)
}

/// Resolves an inter-group drop into the new group order.
///
/// Same semantics as [`resolve_intra_drop`], over group kinds. The moved
/// group carries its members with it; member order inside every group is
/// untouched.
#[must_use]
pub fn resolve_inter_drop(
    order: &[SectionKind],
    active: SectionKind,
    over: Option<SectionKind>,
) -> Option<Vec<SectionKind>> {
    let over = over?;
    if active == over {
        return None;
    }

    let from = order.iter().position(|&k| k == active)?;
    let to = order.iter().position(|&k| k == over)?;

    let mut new_order = order.to_vec();
    array_move(&mut new_order, from, to);
    Some(new_order)
}
