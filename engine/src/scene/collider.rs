//! Collider Snapshots
//!
//! What the placement engine sees of the scene for a single query.  The
//! registry rebuilds these from the live room and instances on every call -
//! nothing here is cached.

use glam::Vec3;

use crate::geometry::Transform;

use super::instance::AssetInstance;
use super::AssetId;

/// Classification of a scene participant for collision purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColliderTag {
    /// Static, always blocking.
    Wall,
    /// Non-colliding placement surface, only used for ray/point targeting.
    Floor,
    /// Placed asset - may block or support stacking.
    Asset,
}

/// One static collider in a placement query.
#[derive(Clone, Debug)]
pub struct Collider {
    pub tag: ColliderTag,
    /// Local box dimensions (width, height, depth).
    pub dimension: Vec3,
    pub transform: Transform,
    /// Set for `Asset` colliders; walls and floors carry no id.
    pub id: Option<AssetId>,
}

impl Collider {
    pub fn wall(dimension: Vec3, transform: Transform) -> Self {
        Self {
            tag: ColliderTag::Wall,
            dimension,
            transform,
            id: None,
        }
    }

    pub fn asset(instance: &AssetInstance) -> Self {
        Self {
            tag: ColliderTag::Asset,
            dimension: instance.dimension(),
            transform: instance.transform(),
            id: Some(instance.id),
        }
    }
}
