//! Collision Query Engine
//!
//! Classifies a moving object's candidate pose against the scene's static
//! colliders: blocked, clear on the floor, or stacked atop another asset.
//! Pure geometry - walls and assets are tested as vertical columns, so the
//! outcome is independent of the mover's current height.

use glam::Vec3;

use crate::geometry::{footprint_corners, OrientedBox, Transform};
use crate::scene::{Collider, ColliderTag};

/// Tolerance when comparing footprints for stack-surface eligibility:
/// a supporting asset may be up to this much narrower per axis and still
/// count as a valid surface.
pub const SURFACE_TOLERANCE: f32 = 0.1;

/// Result of evaluating a candidate pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// No collider intersects; the object rests on the floor.
    Clear,
    /// The pose is illegal.  Never changes x/z - it only signals.
    Blocked,
    /// Resting atop another asset; carries the resolved center height.
    Stacked(f32),
}

impl Outcome {
    pub fn is_valid(self) -> bool {
        !matches!(self, Outcome::Blocked)
    }
}

/// Host-facing per-sample view of an evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    /// Center height the object should rest at.  Falls back to floor level
    /// while blocked so a ghost can still follow the pointer.
    pub resolved_y: f32,
    pub valid: bool,
}

/// Floor-level resting height for a box of the given dimension.
pub fn floor_height(dimension: Vec3) -> f32 {
    dimension.y * 0.5
}

/// Classify a candidate pose against `colliders`.
///
/// The whole list is scanned in the order given (the registry hands it over
/// walls-first, assets in ascending-id order): any intersecting wall blocks
/// immediately; an intersecting asset must be a large-enough, fully
/// containing surface or it blocks too; when several surfaces qualify the
/// highest one wins.  The resolved height is always at least floor level.
pub fn evaluate(dimension: Vec3, transform: &Transform, colliders: &[Collider]) -> Outcome {
    let moving = OrientedBox::column(dimension, transform);
    let mut rest_y = floor_height(dimension);
    let mut stacked = false;

    for other in colliders {
        if other.tag == ColliderTag::Floor {
            continue;
        }

        let other_box = OrientedBox::column(other.dimension, &other.transform);
        if !moving.intersects_horizontal(&other_box) {
            continue;
        }

        if other.tag == ColliderTag::Wall {
            log::trace!("candidate at {} blocked by wall", transform.translation);
            return Outcome::Blocked;
        }

        // Surface heuristic: the other asset must be at least as wide and
        // deep as the mover, within the tolerance.
        let supports = other.dimension.x >= dimension.x - SURFACE_TOLERANCE
            && other.dimension.z >= dimension.z - SURFACE_TOLERANCE;
        if !supports {
            log::trace!(
                "candidate at {} blocked by smaller asset {:?}",
                transform.translation,
                other.id
            );
            return Outcome::Blocked;
        }

        // Partial overhang is disallowed: every footprint corner of the
        // mover must land on the surface.
        let corners = footprint_corners(dimension, transform);
        if corners
            .iter()
            .any(|&corner| !other_box.contains_horizontal(corner))
        {
            log::trace!(
                "candidate at {} overhangs asset {:?}",
                transform.translation,
                other.id
            );
            return Outcome::Blocked;
        }

        // Resting height comes from the true (non-column) box top.
        let top = OrientedBox::true_box(other.dimension, &other.transform).top_y();
        let candidate = top + dimension.y * 0.5;
        if candidate > rest_y {
            rest_y = candidate;
        }
        stacked = true;
    }

    if stacked {
        Outcome::Stacked(rest_y)
    } else {
        Outcome::Clear
    }
}

/// Evaluate and fold the outcome into the `{resolved_y, valid}` view the
/// drag and pending flows feed back to the host every sample.
pub fn resolve(dimension: Vec3, transform: &Transform, colliders: &[Collider]) -> Evaluation {
    match evaluate(dimension, transform, colliders) {
        Outcome::Clear => Evaluation {
            resolved_y: floor_height(dimension),
            valid: true,
        },
        Outcome::Stacked(y) => Evaluation {
            resolved_y: y,
            valid: true,
        },
        Outcome::Blocked => Evaluation {
            resolved_y: floor_height(dimension),
            valid: false,
        },
    }
}
