//! Oriented Bounding Boxes
//!
//! World-space box volumes for placement queries.  Wall and asset tests use
//! the "vertical column" form: the local box is stretched to an effectively
//! unbounded vertical range before transforming, so the 3D box test
//! degenerates to a 2D footprint test and is independent of stacking height.
//! Resting heights come from the true (unstretched) box instead.

use glam::{EulerRot, Mat3, Quat, Vec3};

/// Half-height of the vertical-column form.  Large enough that no vertical
/// axis can ever separate two columns within a room.
pub const COLUMN_HALF_HEIGHT: f32 = 100.0;

/// Uniform half-extent shrink applied to column boxes so exact-contact
/// placements (edges flush against a wall or a neighbor) do not register as
/// collisions.
pub const CONTACT_EPSILON: f32 = 0.01;

/// Axes whose horizontal projection is shorter than this are treated as
/// vertical and skipped in footprint tests.
const HORIZONTAL_AXIS_EPSILON: f32 = 1e-4;

/// World transform of a scene object: translation, XYZ Euler rotation
/// (yaw/pitch/roll - stored, never separately validated), scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new(translation: Vec3, rotation: Vec3) -> Self {
        Self {
            translation,
            rotation,
            ..Self::default()
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    /// Rotation as a quaternion (XYZ Euler order).
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Rotation basis; columns are the world-space directions of the local
    /// x/y/z axes.
    pub fn basis(&self) -> Mat3 {
        Mat3::from_quat(self.rotation_quat())
    }
}

/// An oriented bounding box: center, orthonormal axes, half-extents.
///
/// Never persisted - recomputed from dimension + transform on every query.
#[derive(Clone, Copy, Debug)]
pub struct OrientedBox {
    pub center: Vec3,
    pub axes: [Vec3; 3],
    pub half_extents: Vec3,
}

impl OrientedBox {
    /// Vertical-column box for collision queries: the local box is extended
    /// to +/-[`COLUMN_HALF_HEIGHT`] before transforming, then every
    /// half-extent is shrunk by [`CONTACT_EPSILON`].
    ///
    /// The shrink is applied unclamped: a zero-sized dimension goes slightly
    /// negative, which biases every separation test toward "separated" and
    /// keeps degenerate boxes from ever colliding.
    pub fn column(dimension: Vec3, transform: &Transform) -> Self {
        let basis = transform.basis();
        let half_extents = Vec3::new(
            dimension.x * 0.5 * transform.scale.x,
            COLUMN_HALF_HEIGHT * transform.scale.y,
            dimension.z * 0.5 * transform.scale.z,
        ) - Vec3::splat(CONTACT_EPSILON);

        Self {
            center: transform.translation,
            axes: [basis.x_axis, basis.y_axis, basis.z_axis],
            half_extents,
        }
    }

    /// True-size box: no vertical extension, no contact shrink.  Used only
    /// to derive resting heights for stacking.
    pub fn true_box(dimension: Vec3, transform: &Transform) -> Self {
        let basis = transform.basis();
        Self {
            center: transform.translation,
            axes: [basis.x_axis, basis.y_axis, basis.z_axis],
            half_extents: dimension * 0.5 * transform.scale,
        }
    }

    /// Top of the box's world-space AABB.
    pub fn top_y(&self) -> f32 {
        let h = self.half_extents.to_array();
        self.center.y
            + self.axes[0].y.abs() * h[0]
            + self.axes[1].y.abs() * h[1]
            + self.axes[2].y.abs() * h[2]
    }

    /// Radius of this box projected onto `axis` (separation radius).
    fn projection_radius(&self, axis: Vec3) -> f32 {
        let h = self.half_extents.to_array();
        self.axes[0].dot(axis).abs() * h[0]
            + self.axes[1].dot(axis).abs() * h[1]
            + self.axes[2].dot(axis).abs() * h[2]
    }

    /// Separating-axis test restricted to the horizontal plane.
    ///
    /// Both boxes are vertical columns, so only the horizontally-projected
    /// face normals of either box can separate them; cross-product axes and
    /// the vertical direction never do.  Touching counts as intersecting -
    /// the contact shrink is what keeps flush placements legal.
    pub fn intersects_horizontal(&self, other: &Self) -> bool {
        let mut candidates = [Vec3::ZERO; 6];
        let mut count = 0;
        for volume in [self, other] {
            for axis in volume.axes {
                let flat = Vec3::new(axis.x, 0.0, axis.z);
                if flat.length_squared() > HORIZONTAL_AXIS_EPSILON {
                    candidates[count] = flat.normalize();
                    count += 1;
                }
            }
        }

        let delta = other.center - self.center;
        for &axis in &candidates[..count] {
            let distance = delta.dot(axis).abs();
            if distance > self.projection_radius(axis) + other.projection_radius(axis) {
                return false;
            }
        }
        true
    }

    /// Whether a world-space point lies within this box's horizontal
    /// footprint.  Near-vertical axes constrain nothing in the footprint and
    /// are skipped.
    pub fn contains_horizontal(&self, point: Vec3) -> bool {
        let delta = point - self.center;
        let h = self.half_extents.to_array();
        for i in 0..3 {
            let flat = Vec3::new(self.axes[i].x, 0.0, self.axes[i].z);
            if flat.length_squared() <= HORIZONTAL_AXIS_EPSILON {
                continue;
            }
            if delta.dot(self.axes[i]).abs() > h[i] {
                return false;
            }
        }
        true
    }
}
