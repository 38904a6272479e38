//! Planner
//!
//! Central state holding a whole planning session together: the room and
//! its registry, the asset catalog, the single drag session, the pending
//! ghost, and the current selection.  Hosts feed pointer samples and
//! palette/selection input in, and render from the events and tint flags
//! that come back.  Everything runs synchronously on the caller's thread.

use std::sync::Arc;

use glam::Vec3;

use crate::scene::{AssetCatalog, AssetId, SceneRegistry};
use crate::world::Room;

use super::pending::PendingPlacement;
use super::session::{DragSession, PlacementEvent, Tint};

/// A full planning session.
#[derive(Clone, Debug)]
pub struct Planner {
    catalog: AssetCatalog,
    registry: SceneRegistry,
    drag: DragSession,
    pending: Option<PendingPlacement>,
    selected: Option<AssetId>,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(Room::default(), AssetCatalog::builtin())
    }
}

impl Planner {
    pub fn new(room: Room, catalog: AssetCatalog) -> Self {
        Self {
            catalog,
            registry: SceneRegistry::new(room),
            drag: DragSession::new(),
            pending: None,
            selected: None,
        }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn pending(&self) -> Option<&PendingPlacement> {
        self.pending.as_ref()
    }

    pub fn selected(&self) -> Option<AssetId> {
        self.selected
    }

    /// Tint for the asset currently in drag.
    pub fn tint(&self) -> Tint {
        self.drag.tint()
    }

    /// Palette pick: start placing a new asset of the named kind.
    pub fn start_pending(&mut self, label: &str) -> bool {
        let Some(kind) = self.catalog.kind(label) else {
            return false;
        };
        self.pending = Some(PendingPlacement::new(Arc::clone(kind)));
        true
    }

    /// Select a placed asset (or clear the selection with `None`).
    pub fn select(&mut self, id: Option<AssetId>) {
        self.selected = id.filter(|id| self.registry.get(*id).is_some());
    }

    /// Route one pointer-movement sample: the pending ghost takes priority,
    /// otherwise an active drag consumes it.
    pub fn pointer_moved(&mut self, hit: Vec3) -> Option<PlacementEvent> {
        if let Some(pending) = self.pending.as_mut() {
            Some(pending.update_target(hit, &self.registry))
        } else if self.drag.is_active() {
            self.drag.update(hit, &self.registry)
        } else {
            None
        }
    }

    /// Confirm the pending ghost at its current pose.
    pub fn confirm_pending(&mut self) -> Option<PlacementEvent> {
        let event = self.pending.as_ref()?.confirm(&mut self.registry)?;
        self.pending = None;
        Some(event)
    }

    /// Begin dragging a placed asset.
    pub fn begin_drag(&mut self, id: AssetId) -> bool {
        self.drag.begin(id, &self.registry)
    }

    /// End the active drag, committing or rolling back.
    pub fn end_drag(&mut self) -> Option<PlacementEvent> {
        self.drag.end(&mut self.registry)
    }

    /// Delete a placed asset.
    pub fn remove(&mut self, id: AssetId) -> Option<PlacementEvent> {
        self.registry.remove(id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(PlacementEvent::Removed { id })
    }

    /// Escape/deselect signal: clears pending-placement and selection
    /// state.  Never interrupts a drag already in progress - there is no
    /// mid-drag cancellation path.
    pub fn escape(&mut self) -> Option<PlacementEvent> {
        if self.drag.is_active() {
            return None;
        }
        let had_state = self.pending.is_some() || self.selected.is_some();
        self.pending = None;
        self.selected = None;
        had_state.then_some(PlacementEvent::Canceled)
    }
}
