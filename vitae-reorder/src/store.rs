//! The section store: single source of truth for one resume's arrangement.
//!
//! One owner, one writer. Mutation happens only through whole-array
//! replacement (the reconciler's output), never element writes, which keeps
//! the permutation invariant enforceable in one place. The id index is
//! rebuilt on every replacement. Subscribers watch a revision counter and
//! re-read the store when it ticks.

use std::collections::HashMap;
use tokio::sync::watch;
use vitae_model::Section;
use vitae_types::SectionId;

/// Owned, ordered list of a resume's sections.
#[derive(Debug)]
pub struct SectionStore {
    sections: Vec<Section>,
    index: HashMap<SectionId, usize>,
    revision: u64,
    notify: watch::Sender<u64>,
}

impl SectionStore {
    /// Creates a store seeded from the persisted resume.
    ///
    /// Duplicate ids are a caller contract violation; behavior under
    /// duplicates is undefined.
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        let index = build_index(&sections);
        debug_assert_eq!(index.len(), sections.len(), "duplicate section id");
        let (notify, _) = watch::channel(0);
        Self {
            sections,
            index,
            revision: 0,
            notify,
        }
    }

    /// The current arrangement, in authoritative order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by id.
    #[must_use]
    pub fn get(&self, id: &SectionId) -> Option<&Section> {
        self.index.get(id).map(|&at| &self.sections[at])
    }

    /// The array position of a section, if present.
    #[must_use]
    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The flat id order, as sent to the persistence gateway.
    #[must_use]
    pub fn ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the store holds no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Monotonic revision, bumped on every replacement.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Subscribes to change notification. The receiver yields the revision;
    /// read the store again when it changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }

    /// Replaces the entire arrangement and notifies subscribers.
    pub fn replace(&mut self, sections: Vec<Section>) {
        self.index = build_index(&sections);
        debug_assert_eq!(self.index.len(), sections.len(), "duplicate section id");
        self.sections = sections;
        self.revision += 1;
        self.notify.send_replace(self.revision);
    }
}

fn build_index(sections: &[Section]) -> HashMap<SectionId, usize> {
    sections
        .iter()
        .enumerate()
        .map(|(at, s)| (s.id.clone(), at))
        .collect()
}
