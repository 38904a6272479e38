//! Footprint Extraction
//!
//! The four ground-level corners of an object's box in world space.  Used
//! only by the stacking containment check - wall tests never look at
//! footprints.

use glam::Vec3;

use super::Transform;

/// World-space corners of the box's bottom face.
pub fn footprint_corners(dimension: Vec3, transform: &Transform) -> [Vec3; 4] {
    let basis = transform.basis();
    let half = dimension * 0.5 * transform.scale;

    let local = [
        Vec3::new(-half.x, -half.y, -half.z),
        Vec3::new(half.x, -half.y, -half.z),
        Vec3::new(half.x, -half.y, half.z),
        Vec3::new(-half.x, -half.y, half.z),
    ];

    local.map(|corner| transform.translation + basis * corner)
}
