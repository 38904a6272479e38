//! Drag Session
//!
//! One drag-to-move interaction over a placed asset: snapshot the pre-drag
//! transform, re-validate against the live scene on every pointer sample,
//! and on release either commit the new transform or roll back to the
//! snapshot exactly.  Exactly one asset can be in drag at a time; everything
//! else is a static collider for the duration.

use glam::Vec3;

use crate::geometry::Transform;
use crate::scene::{AssetId, SceneRegistry};

use super::collision::resolve;

/// State of a drag session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    Idle,
    /// Following pointer samples.
    Dragging,
    /// Last drag ended valid and committed.
    Committed,
    /// Last drag ended invalid and restored the snapshot.
    RolledBack,
}

impl Default for DragState {
    fn default() -> Self {
        DragState::Idle
    }
}

/// Visual tint the host should render the dragged asset with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    /// The asset's own base color.
    Base,
    /// The current pose is illegal.
    Invalid,
}

/// Events emitted by the placement flows.
#[derive(Clone, Debug, PartialEq)]
pub enum PlacementEvent {
    /// The dragged or pending pose changed.
    PreviewMoved { position: Vec3, valid: bool },
    /// A new asset was placed.
    Placed { id: AssetId, position: Vec3 },
    /// A drag committed its final transform.
    TransformCommitted {
        id: AssetId,
        position: Vec3,
        rotation: Vec3,
    },
    /// A drag ended invalid; the pre-drag transform was restored.
    RolledBack {
        id: AssetId,
        position: Vec3,
        rotation: Vec3,
    },
    /// An asset was deleted.
    Removed { id: AssetId },
    /// Pending placement / selection state was cleared.
    Canceled,
}

#[derive(Clone, Copy, Debug)]
struct Snapshot {
    position: Vec3,
    rotation: Vec3,
}

#[derive(Clone, Debug)]
struct ActiveDrag {
    id: AssetId,
    dimension: Vec3,
    snapshot: Snapshot,
    /// Pose currently previewed.  Follows the pointer even while blocked.
    position: Vec3,
    rotation: Vec3,
    valid: bool,
}

/// Drag-to-move state machine: `Idle -> Dragging -> {Committed | RolledBack}`.
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    state: DragState,
    active: Option<ActiveDrag>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Id of the asset currently in drag.
    pub fn dragged_id(&self) -> Option<AssetId> {
        if !self.is_active() {
            return None;
        }
        self.active.as_ref().map(|drag| drag.id)
    }

    /// Whether the latest sample was a legal pose.
    pub fn valid(&self) -> bool {
        self.active.as_ref().map(|drag| drag.valid).unwrap_or(true)
    }

    /// Tint feedback for the host.
    pub fn tint(&self) -> Tint {
        if self.is_active() && !self.valid() {
            Tint::Invalid
        } else {
            Tint::Base
        }
    }

    /// Pose the host should draw the dragged asset at.
    pub fn preview_position(&self) -> Option<Vec3> {
        self.active.as_ref().map(|drag| drag.position)
    }

    /// Begin dragging a placed asset.  Snapshots the pre-drag transform and
    /// resets validity.  Refused while another drag is active or for an
    /// unknown id.
    pub fn begin(&mut self, id: AssetId, registry: &SceneRegistry) -> bool {
        if self.is_active() {
            return false;
        }
        let Some(instance) = registry.get(id) else {
            return false;
        };

        log::debug!("drag start: {} at {}", id, instance.position);
        self.state = DragState::Dragging;
        self.active = Some(ActiveDrag {
            id,
            dimension: instance.dimension(),
            snapshot: Snapshot {
                position: instance.position,
                rotation: instance.rotation,
            },
            position: instance.position,
            rotation: instance.rotation,
            valid: true,
        });
        true
    }

    /// Feed one pointer-movement sample.  `target` supplies x/z; y is
    /// derived from the evaluation (floor or stack height).  Runs one
    /// collision query against the live scene, excluding the dragged asset
    /// itself.
    pub fn update(&mut self, target: Vec3, registry: &SceneRegistry) -> Option<PlacementEvent> {
        if self.state != DragState::Dragging {
            return None;
        }
        let drag = self.active.as_mut()?;

        let candidate = Transform::new(
            Vec3::new(target.x, drag.position.y, target.z),
            drag.rotation,
        );
        let colliders = registry.colliders_excluding(Some(drag.id));
        let evaluation = resolve(drag.dimension, &candidate, &colliders);

        drag.valid = evaluation.valid;
        drag.position = Vec3::new(target.x, evaluation.resolved_y, target.z);

        Some(PlacementEvent::PreviewMoved {
            position: drag.position,
            valid: drag.valid,
        })
    }

    /// End the drag: commit the previewed transform when the last sample
    /// was valid, otherwise restore the snapshot exactly.
    pub fn end(&mut self, registry: &mut SceneRegistry) -> Option<PlacementEvent> {
        if self.state != DragState::Dragging {
            return None;
        }
        let drag = self.active.take()?;

        let event = if drag.valid {
            registry.commit_transform(drag.id, drag.position, drag.rotation);
            self.state = DragState::Committed;
            log::debug!("drag commit: {} at {}", drag.id, drag.position);
            PlacementEvent::TransformCommitted {
                id: drag.id,
                position: drag.position,
                rotation: drag.rotation,
            }
        } else {
            registry.commit_transform(drag.id, drag.snapshot.position, drag.snapshot.rotation);
            self.state = DragState::RolledBack;
            log::debug!("drag rollback: {}", drag.id);
            PlacementEvent::RolledBack {
                id: drag.id,
                position: drag.snapshot.position,
                rotation: drag.snapshot.rotation,
            }
        };
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::AssetCatalog;
    use crate::world::Room;
    use std::sync::Arc;

    fn table_scene() -> (SceneRegistry, AssetId) {
        let catalog = AssetCatalog::builtin();
        let mut registry = SceneRegistry::new(Room::default());
        let table = registry.place(
            Arc::clone(catalog.kind("Table").unwrap()),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::ZERO,
        );
        (registry, table)
    }

    #[test]
    fn test_begin_snapshots_and_activates() {
        let (registry, table) = table_scene();
        let mut session = DragSession::new();

        assert!(session.begin(table, &registry));
        assert_eq!(session.state(), DragState::Dragging);
        assert_eq!(session.dragged_id(), Some(table));
        assert_eq!(session.tint(), Tint::Base);
    }

    #[test]
    fn test_begin_refused_while_active_or_unknown() {
        let (registry, table) = table_scene();
        let mut session = DragSession::new();

        assert!(!session.begin(AssetId(42), &registry));
        assert!(session.begin(table, &registry));
        assert!(!session.begin(table, &registry));
    }

    #[test]
    fn test_valid_drag_commits() {
        let (mut registry, table) = table_scene();
        let mut session = DragSession::new();
        session.begin(table, &registry);

        let event = session.update(Vec3::new(2.0, 0.0, 1.0), &registry).unwrap();
        assert_eq!(
            event,
            PlacementEvent::PreviewMoved {
                position: Vec3::new(2.0, 1.0, 1.0),
                valid: true,
            }
        );

        let event = session.end(&mut registry).unwrap();
        assert_eq!(session.state(), DragState::Committed);
        assert_eq!(
            event,
            PlacementEvent::TransformCommitted {
                id: table,
                position: Vec3::new(2.0, 1.0, 1.0),
                rotation: Vec3::ZERO,
            }
        );
        assert_eq!(
            registry.get(table).unwrap().position,
            Vec3::new(2.0, 1.0, 1.0)
        );
    }

    #[test]
    fn test_invalid_drag_rolls_back_exactly() {
        let (mut registry, table) = table_scene();
        let start = registry.get(table).unwrap().position;
        let mut session = DragSession::new();
        session.begin(table, &registry);

        // Deep into the north wall.
        let event = session
            .update(Vec3::new(0.0, 0.0, -4.5), &registry)
            .unwrap();
        assert_eq!(
            event,
            PlacementEvent::PreviewMoved {
                position: Vec3::new(0.0, 1.0, -4.5),
                valid: false,
            }
        );
        assert_eq!(session.tint(), Tint::Invalid);

        let event = session.end(&mut registry).unwrap();
        assert_eq!(session.state(), DragState::RolledBack);
        assert_eq!(
            event,
            PlacementEvent::RolledBack {
                id: table,
                position: start,
                rotation: Vec3::ZERO,
            }
        );
        assert_eq!(registry.get(table).unwrap().position, start);
    }

    #[test]
    fn test_recovery_after_invalid_sample() {
        let (mut registry, table) = table_scene();
        let mut session = DragSession::new();
        session.begin(table, &registry);

        session.update(Vec3::new(0.0, 0.0, -4.5), &registry);
        assert!(!session.valid());
        session.update(Vec3::new(2.0, 0.0, 1.0), &registry);
        assert!(session.valid());

        session.end(&mut registry);
        assert_eq!(session.state(), DragState::Committed);
        assert_eq!(
            registry.get(table).unwrap().position,
            Vec3::new(2.0, 1.0, 1.0)
        );
    }

    #[test]
    fn test_drag_onto_surface_stacks() {
        let catalog = AssetCatalog::builtin();
        let (mut registry, _) = table_scene();
        let plant = registry.place(
            Arc::clone(catalog.kind("Plant").unwrap()),
            Vec3::new(3.0, 0.5, 3.0),
            Vec3::ZERO,
        );

        let mut session = DragSession::new();
        session.begin(plant, &registry);
        // Plant 1x1 fully over the 2x3 table top (table top y = 2).
        let event = session.update(Vec3::new(0.0, 0.0, 0.0), &registry).unwrap();
        assert_eq!(
            event,
            PlacementEvent::PreviewMoved {
                position: Vec3::new(0.0, 2.5, 0.0),
                valid: true,
            }
        );

        session.end(&mut registry);
        assert_eq!(registry.get(plant).unwrap().position.y, 2.5);
    }

    #[test]
    fn test_update_and_end_are_noops_when_idle() {
        let (mut registry, _) = table_scene();
        let mut session = DragSession::new();

        assert!(session.update(Vec3::ZERO, &registry).is_none());
        assert!(session.end(&mut registry).is_none());
        assert_eq!(session.state(), DragState::Idle);
    }
}
