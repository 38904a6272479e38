//! Geometry Module
//!
//! Box volumes and the horizontal separating-axis math behind placement
//! validation.  Everything here is derived, ephemeral state: boxes are
//! rebuilt from an object's dimension and current transform on every query.

pub mod footprint;
pub mod obb;

pub use footprint::footprint_corners;
pub use obb::{COLUMN_HALF_HEIGHT, CONTACT_EPSILON, OrientedBox, Transform};
