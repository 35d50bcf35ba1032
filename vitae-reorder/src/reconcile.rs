//! The order reconciler: merge a local permutation into one flat list.
//!
//! Reconciliation is always a pure permutation — the multiset of section ids
//! in equals the multiset out. An order that names missing or foreign ids is
//! rejected rather than silently dropping sections. The reconciled list has
//! `index` recomputed to array position, ready to persist.

use crate::error::{ReorderError, ReorderResult};
use crate::grouping::Grouped;
use std::collections::HashSet;
use vitae_model::Section;
use vitae_types::{SectionId, SectionKind};

/// Applies a new member order to one group and rebuilds the flat list.
///
/// Group order is unchanged; only `kind`'s members are rearranged.
pub fn apply_member_order(
    grouped: &Grouped,
    kind: SectionKind,
    member_order: &[SectionId],
) -> ReorderResult<Vec<Section>> {
    let members = grouped
        .members(kind)
        .ok_or(ReorderError::UnknownGroup(kind))?;

    let current: HashSet<&SectionId> = members.iter().map(|s| &s.id).collect();
    let proposed: HashSet<&SectionId> = member_order.iter().collect();
    if member_order.len() != members.len() || current != proposed {
        return Err(ReorderError::OrderMismatch(format!(
            "{kind} group has {} members, order names {}",
            members.len(),
            member_order.len()
        )));
    }

    let flat = grouped
        .order()
        .iter()
        .flat_map(|&group_kind| {
            if group_kind == kind {
                // Ids were just verified against membership, so lookup succeeds.
                member_order
                    .iter()
                    .filter_map(|id| members.iter().find(|s| &s.id == id).cloned())
                    .collect::<Vec<_>>()
            } else {
                grouped
                    .members(group_kind)
                    .map(<[Section]>::to_vec)
                    .unwrap_or_default()
            }
        })
        .collect();

    Ok(reindex(flat))
}

/// Applies a new group order and rebuilds the flat list.
///
/// Each group travels as an atomic block; member order inside every group is
/// unchanged.
pub fn apply_group_order(
    grouped: &Grouped,
    group_order: &[SectionKind],
) -> ReorderResult<Vec<Section>> {
    let current: HashSet<SectionKind> = grouped.order().iter().copied().collect();
    let proposed: HashSet<SectionKind> = group_order.iter().copied().collect();
    if group_order.len() != grouped.order().len() || current != proposed {
        return Err(ReorderError::OrderMismatch(format!(
            "{} groups present, order names {}",
            grouped.order().len(),
            group_order.len()
        )));
    }

    let flat = group_order
        .iter()
        .flat_map(|&kind| {
            grouped
                .members(kind)
                .map(<[Section]>::to_vec)
                .unwrap_or_default()
        })
        .collect();

    Ok(reindex(flat))
}

/// Rewrites each section's advisory `index` to its array position.
fn reindex(mut sections: Vec<Section>) -> Vec<Section> {
    for (position, section) in sections.iter_mut().enumerate() {
        section.index = position as u32;
    }
    sections
}
