//! Placement Module
//!
//! The interactive core: collision queries, the drag-to-move session, the
//! drag-to-place ghost, and the planner facade that holds one session's
//! state together.

pub mod collision;
pub mod pending;
pub mod planner;
pub mod session;

pub use collision::{evaluate, floor_height, resolve, Evaluation, Outcome, SURFACE_TOLERANCE};
pub use pending::PendingPlacement;
pub use planner::Planner;
pub use session::{DragSession, DragState, PlacementEvent, Tint};
