//! Room Bounds
//!
//! An axis-aligned square room in the horizontal plane.  Immutable for the
//! session lifetime.  The room contributes four wall colliders (one per
//! edge, zero thickness, spanning the full edge) and the boundary clamp
//! used by the new-placement flow.

use glam::Vec3;

use crate::geometry::Transform;
use crate::scene::Collider;

/// Default room edge length.
pub const DEFAULT_ROOM_SIZE: f32 = 10.0;

/// Default wall height.
pub const DEFAULT_WALL_HEIGHT: f32 = 4.0;

/// A bounded square room.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Room {
    /// Edge length of the square floor.
    pub size: f32,
    /// Height of the walls.
    pub wall_height: f32,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            size: DEFAULT_ROOM_SIZE,
            wall_height: DEFAULT_WALL_HEIGHT,
        }
    }
}

impl Room {
    pub fn new(size: f32, wall_height: f32) -> Self {
        Self { size, wall_height }
    }

    /// Distance from the room center to a wall.
    pub fn half_extent(&self) -> f32 {
        self.size * 0.5
    }

    /// The four wall colliders in fixed order: north (-z), east (+x),
    /// south (+z), west (-x).  Walls are zero-thickness slabs; the contact
    /// shrink in the collision volume keeps flush placements legal while
    /// any real penetration still intersects.
    pub fn wall_colliders(&self) -> [Collider; 4] {
        let half = self.half_extent();
        let center_y = self.wall_height * 0.5;
        let along_x = Vec3::new(self.size, self.wall_height, 0.0);
        let along_z = Vec3::new(0.0, self.wall_height, self.size);

        [
            Collider::wall(
                along_x,
                Transform::from_translation(Vec3::new(0.0, center_y, -half)),
            ),
            Collider::wall(
                along_z,
                Transform::from_translation(Vec3::new(half, center_y, 0.0)),
            ),
            Collider::wall(
                along_x,
                Transform::from_translation(Vec3::new(0.0, center_y, half)),
            ),
            Collider::wall(
                along_z,
                Transform::from_translation(Vec3::new(-half, center_y, 0.0)),
            ),
        ]
    }

    /// Constrain a candidate horizontal position so the object's footprint
    /// stays inside the room.
    ///
    /// Each axis clamps independently to `[-limit, +limit]` with
    /// `limit = size/2 - extent/2`.  An object wider than the room has a
    /// negative limit and is forced to the center line on that axis; the
    /// collision engine then reports it blocked against the walls, so the
    /// pose can never commit.
    pub fn clamp_to_room(&self, x: f32, z: f32, width: f32, depth: f32) -> (f32, f32) {
        (
            clamp_axis(x, self.size, width),
            clamp_axis(z, self.size, depth),
        )
    }
}

fn clamp_axis(value: f32, room_size: f32, extent: f32) -> f32 {
    let limit = room_size * 0.5 - extent * 0.5;
    if limit <= 0.0 {
        0.0
    } else {
        value.clamp(-limit, limit)
    }
}
