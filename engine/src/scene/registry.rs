//! Scene Registry
//!
//! Owns the placed-asset collection and the room, and serves collider
//! snapshots to the placement engine.  Single writer: only drag-end commits
//! and explicit place/remove calls mutate it, never a query.

use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec3;

use crate::world::Room;

use super::{AssetId, AssetInstance, AssetKind, Collider};

/// Flat, id-keyed store of placed assets.
#[derive(Clone, Debug)]
pub struct SceneRegistry {
    room: Room,
    assets: HashMap<AssetId, AssetInstance>,
    next_id: u32,
}

impl SceneRegistry {
    pub fn new(room: Room) -> Self {
        Self {
            room,
            assets: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn get(&self, id: AssetId) -> Option<&AssetInstance> {
        self.assets.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetInstance> {
        self.assets.values()
    }

    /// Create a new instance.  The creation sink of the placement flows.
    pub fn place(&mut self, kind: Arc<AssetKind>, position: Vec3, rotation: Vec3) -> AssetId {
        let id = AssetId(self.next_id);
        self.next_id += 1;

        log::debug!("place {} ({}) at {}", id, kind.label, position);
        self.assets.insert(
            id,
            AssetInstance {
                id,
                kind,
                position,
                rotation,
            },
        );
        id
    }

    /// Write a committed drag transform back to an instance.  Returns false
    /// for an unknown id.
    pub fn commit_transform(&mut self, id: AssetId, position: Vec3, rotation: Vec3) -> bool {
        match self.assets.get_mut(&id) {
            Some(instance) => {
                instance.position = position;
                instance.rotation = rotation;
                true
            }
            None => false,
        }
    }

    /// Delete an instance.
    pub fn remove(&mut self, id: AssetId) -> Option<AssetInstance> {
        let removed = self.assets.remove(&id);
        if removed.is_some() {
            log::debug!("remove {id}");
        }
        removed
    }

    /// Collider snapshot of the live scene: the four walls first, then every
    /// asset except `exclude` in ascending-id order.
    ///
    /// The fixed order makes placement outcomes deterministic regardless of
    /// hash-map iteration; rebuilt on every call so the snapshot always
    /// reflects the current scene.
    pub fn colliders_excluding(&self, exclude: Option<AssetId>) -> Vec<Collider> {
        let mut colliders = Vec::with_capacity(4 + self.assets.len());
        colliders.extend(self.room.wall_colliders());

        let mut ids: Vec<AssetId> = self
            .assets
            .keys()
            .copied()
            .filter(|id| Some(*id) != exclude)
            .collect();
        ids.sort_unstable();

        colliders.extend(ids.iter().map(|id| Collider::asset(&self.assets[id])));
        colliders
    }
}
