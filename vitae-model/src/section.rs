use serde::{Deserialize, Serialize};
use vitae_types::{SectionId, SectionKind};

/// One resume content block, individually orderable.
///
/// `index` is the position as last persisted and is advisory only: the
/// in-memory array order is ground truth, and `index` is recomputed from
/// array position before every flush. `data` holds the kind-specific payload
/// and is never inspected by the reordering core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub kind: SectionKind,
    pub index: u32,
    pub data: serde_json::Value,
}

impl Section {
    /// Creates a section with the given id, kind and payload.
    /// `index` starts at 0 and is overwritten on reconciliation.
    #[must_use]
    pub fn new(id: SectionId, kind: SectionKind, data: serde_json::Value) -> Self {
        Self {
            id,
            kind,
            index: 0,
            data,
        }
    }

    /// Extract a string value from `data` using a JSON pointer (e.g., "/school").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.data.pointer(pointer).and_then(|v| v.as_str())
    }

    /// Extract a boolean value from `data` using a JSON pointer.
    pub fn get_bool(&self, pointer: &str) -> Option<bool> {
        self.data.pointer(pointer).and_then(|v| v.as_bool())
    }

    /// Extract a numeric value from `data` using a JSON pointer.
    pub fn get_number(&self, pointer: &str) -> Option<f64> {
        self.data.pointer(pointer).and_then(|v| v.as_f64())
    }
}
