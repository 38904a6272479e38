//! Placed Asset Instances

use std::fmt;
use std::sync::Arc;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::Transform;

use super::AssetKind;

/// Unique, stable identifier of a placed asset.  Allocated by the registry
/// and never reused within a session.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AssetId(pub u32);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A placed object in the room.
///
/// `position.y` is never authored directly - it is always derived by the
/// placement engine (floor level or stacked).
#[derive(Clone, Debug)]
pub struct AssetInstance {
    pub id: AssetId,
    /// Shared catalog entry.
    pub kind: Arc<AssetKind>,
    /// World-space translation.
    pub position: Vec3,
    /// Yaw/pitch/roll in radians.  Stored, not validated against collision.
    pub rotation: Vec3,
}

impl AssetInstance {
    pub fn dimension(&self) -> Vec3 {
        self.kind.dimension
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.rotation)
    }
}
