//! Editor session: glue between store, drag session, and gateway.
//!
//! One `EditorSession` owns one resume's arrangement for the lifetime of an
//! editor view. Drops are reconciled synchronously into the store (the UI
//! renders the new order immediately); the gateway call is fired on a
//! spawned task and never blocks or reorders the local state. On gateway
//! failure the optimistic order is kept — the failure is logged and exposed
//! on [`EditorSession::persist_errors`] for the host to surface.

use crate::engine::{resolve_inter_drop, resolve_intra_drop};
use crate::error::{ReorderError, ReorderResult};
use crate::grouping::{Grouped, group_sections};
use crate::reconcile::{apply_group_order, apply_member_order};
use crate::session::{DragSession, DragTarget};
use crate::store::SectionStore;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use vitae_gateway::PersistenceGateway;
use vitae_model::{Rendered, Section, SectionRenderer};
use vitae_types::{ResumeId, SectionId, SectionKind};

/// Drag-and-drop editing session for one resume.
///
/// Mutating operations must run inside a tokio runtime: persistence is
/// spawned fire-and-forget.
pub struct EditorSession {
    resume_id: ResumeId,
    store: SectionStore,
    drag: DragSession,
    gateway: Arc<dyn PersistenceGateway>,
    persist_errors: watch::Sender<Option<String>>,
}

impl EditorSession {
    /// Creates a session seeded from the persisted resume.
    #[must_use]
    pub fn new(
        resume_id: ResumeId,
        sections: Vec<Section>,
        gateway: Arc<dyn PersistenceGateway>,
    ) -> Self {
        let (persist_errors, _) = watch::channel(None);
        Self {
            resume_id,
            store: SectionStore::new(sections),
            drag: DragSession::Idle,
            gateway,
            persist_errors,
        }
    }

    /// The resume being edited.
    #[must_use]
    pub fn resume_id(&self) -> &ResumeId {
        &self.resume_id
    }

    /// The section store.
    #[must_use]
    pub fn store(&self) -> &SectionStore {
        &self.store
    }

    /// The current arrangement, in authoritative order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        self.store.sections()
    }

    /// The grouped view, derived fresh from the current arrangement.
    #[must_use]
    pub fn grouped(&self) -> Grouped {
        group_sections(self.store.sections())
    }

    /// The drag session state.
    #[must_use]
    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// Watches the outcome of the most recent persistence attempt:
    /// `None` on success, the error message on failure.
    #[must_use]
    pub fn persist_errors(&self) -> watch::Receiver<Option<String>> {
        self.persist_errors.subscribe()
    }

    /// Renders every section in grouped order, flagging group openers.
    pub fn render<R: SectionRenderer>(&self, renderer: &R) -> Vec<Rendered<R::Output>> {
        let grouped = self.grouped();
        grouped
            .order()
            .iter()
            .flat_map(|&kind| {
                grouped
                    .members(kind)
                    .unwrap_or(&[])
                    .iter()
                    .enumerate()
                    .map(|(at, section)| renderer.render(section, at == 0))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    // ── Drag gesture ─────────────────────────────────────────────

    /// Lifts a section for reordering within its group.
    pub fn begin_section_drag(&mut self, id: &SectionId) -> ReorderResult<()> {
        let kind = self
            .store
            .get(id)
            .map(|s| s.kind)
            .ok_or_else(|| ReorderError::UnknownSection(id.clone()))?;
        self.drag.begin_intra(kind, id.clone())?;
        debug!(section = %id, group = %kind, "section drag started");
        Ok(())
    }

    /// Lifts a whole group for reordering among groups.
    pub fn begin_group_drag(&mut self, kind: SectionKind) -> ReorderResult<()> {
        if !self.store.sections().iter().any(|s| s.kind == kind) {
            return Err(ReorderError::UnknownGroup(kind));
        }
        self.drag.begin_inter(kind)?;
        debug!(group = %kind, "group drag started");
        Ok(())
    }

    /// Updates the hovered target for the active drag.
    ///
    /// During a section drag, a target outside the dragged section's group
    /// is invalid and clears the target instead.
    pub fn drag_over(&mut self, target: Option<DragTarget>) -> ReorderResult<()> {
        let target = match (&self.drag, target) {
            (DragSession::IntraGroup { kind, .. }, Some(DragTarget::Section(id))) => {
                match self.store.get(&id) {
                    Some(section) if section.kind == *kind => Some(DragTarget::Section(id)),
                    _ => None,
                }
            }
            (_, target) => target,
        };
        self.drag.set_over(target)
    }

    /// Abandons the active drag with no mutation.
    pub fn cancel_drag(&mut self) {
        if !self.drag.is_idle() {
            debug!("drag cancelled");
        }
        self.drag.cancel();
    }

    /// Drops the lifted item, reconciles, and persists.
    ///
    /// Returns `Ok(false)` for benign no-op drops (no target, or dropped on
    /// itself); the store is untouched and the gateway is not called.
    pub fn complete_drag(&mut self) -> ReorderResult<bool> {
        match self.drag.take() {
            DragSession::Idle => Err(ReorderError::NoActiveDrag),
            DragSession::IntraGroup { kind, active, over } => {
                let grouped = self.grouped();
                let members = grouped
                    .members(kind)
                    .ok_or(ReorderError::UnknownGroup(kind))?;
                match resolve_intra_drop(members, &active, over.as_ref()) {
                    Some(member_order) => {
                        let flat = apply_member_order(&grouped, kind, &member_order)?;
                        self.commit(flat);
                        Ok(true)
                    }
                    None => Ok(false),
                }
            }
            DragSession::InterGroup { active, over } => {
                let grouped = self.grouped();
                match resolve_inter_drop(grouped.order(), active, over) {
                    Some(group_order) => {
                        let flat = apply_group_order(&grouped, &group_order)?;
                        self.commit(flat);
                        Ok(true)
                    }
                    None => Ok(false),
                }
            }
        }
    }

    // ── Direct reorders (keyboard / programmatic path) ───────────

    /// Applies a new member order to one group, then persists.
    pub fn handle_group_reorder(
        &mut self,
        kind: SectionKind,
        member_order: &[SectionId],
    ) -> ReorderResult<()> {
        let flat = apply_member_order(&self.grouped(), kind, member_order)?;
        self.commit(flat);
        Ok(())
    }

    /// Applies a new group order, then persists.
    pub fn handle_group_move(&mut self, group_order: &[SectionKind]) -> ReorderResult<()> {
        let flat = apply_group_order(&self.grouped(), group_order)?;
        self.commit(flat);
        Ok(())
    }

    /// Replaces the arrangement from a server refetch.
    ///
    /// Discards any in-progress drag and does not persist — the server is
    /// the source of this data.
    pub fn replace_sections(&mut self, sections: Vec<Section>) {
        self.drag.cancel();
        info!(sections = sections.len(), "arrangement replaced from refetch");
        self.store.replace(sections);
    }

    /// Optimistic commit: store first, then fire-and-forget persistence.
    fn commit(&mut self, flat: Vec<Section>) {
        self.store.replace(flat);
        debug!(revision = self.store.revision(), "arrangement reconciled");

        let gateway = Arc::clone(&self.gateway);
        let resume_id = self.resume_id.clone();
        let section_ids = self.store.ids();
        let outcome = self.persist_errors.clone();
        tokio::spawn(async move {
            match gateway.rearrange(&resume_id, &section_ids).await {
                Ok(()) => {
                    outcome.send_replace(None);
                }
                Err(e) => {
                    warn!(resume_id = %resume_id, error = %e, "failed to persist section order");
                    outcome.send_replace(Some(e.to_string()));
                }
            }
        });
    }
}
