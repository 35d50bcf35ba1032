//! Grouping: the derived view the drag engines operate on.
//!
//! Groups are never stored — they are recomputed from the flat list on every
//! use, so the flat list stays the single source of truth. Group order is
//! first-occurrence order of each distinct kind. Sections of one kind merge
//! into a single group even when their runs are not contiguous in the flat
//! list (kind sequence A,B,A yields groups [A, B] with both A members
//! together); hosts rely on this to heal interleaved data on load.

use std::collections::HashMap;
use vitae_model::Section;
use vitae_types::{SectionId, SectionKind};

/// The grouped view of an ordered section list.
#[derive(Debug, Clone, Default)]
pub struct Grouped {
    order: Vec<SectionKind>,
    members: HashMap<SectionKind, Vec<Section>>,
}

impl Grouped {
    /// Group kinds in first-occurrence order.
    #[must_use]
    pub fn order(&self) -> &[SectionKind] {
        &self.order
    }

    /// Members of one group, in flat-list relative order.
    #[must_use]
    pub fn members(&self, kind: SectionKind) -> Option<&[Section]> {
        self.members.get(&kind).map(Vec::as_slice)
    }

    /// The kind of the group containing the given section, if any.
    #[must_use]
    pub fn kind_of(&self, id: &SectionId) -> Option<SectionKind> {
        self.order
            .iter()
            .copied()
            .find(|kind| {
                self.members
                    .get(kind)
                    .is_some_and(|members| members.iter().any(|s| &s.id == id))
            })
    }

    /// Total number of sections across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.values().map(Vec::len).sum()
    }

    /// Returns true if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Concatenates all members in group order back into one flat list.
    #[must_use]
    pub fn flatten(&self) -> Vec<Section> {
        self.order
            .iter()
            .flat_map(|kind| self.members[kind].iter().cloned())
            .collect()
    }
}

/// Partitions an ordered section list into kind-groups.
///
/// Pure and idempotent: identical input yields identical output. Each
/// distinct kind appears in the group order exactly once, at the position of
/// its first occurrence; members keep their relative order from the input.
#[must_use]
pub fn group_sections(sections: &[Section]) -> Grouped {
    let mut order = Vec::new();
    let mut members: HashMap<SectionKind, Vec<Section>> = HashMap::new();

    for section in sections {
        if !members.contains_key(&section.kind) {
            order.push(section.kind);
        }
        members
            .entry(section.kind)
            .or_default()
            .push(section.clone());
    }

    Grouped { order, members }
}
