//! Roomcraft Engine Library
//!
//! Spatial placement core for an interior room planner: box-shaped assets
//! are dragged around a bounded square room while the engine continuously
//! validates the pose - no wall or asset penetration, stacking atop
//! sufficiently large surfaces, and clamping to the room interior.
//! Rendering, model loading, cameras, and pointer raycasting live in the
//! embedding host; this crate only decides whether a pose is legal, what
//! height it rests at, and what to roll back to when it is not.
//!
//! # Modules
//!
//! - [`geometry`] - Oriented boxes, the horizontal separating-axis test, footprints
//! - [`world`] - Room bounds, wall colliders, and the boundary clamp
//! - [`scene`] - Asset catalog, placed instances, and the owning registry
//! - [`placement`] - Collision queries, drag sessions, and the planner facade
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use roomcraft_engine::{AssetCatalog, PlacementEvent, Planner, Room};
//!
//! let mut planner = Planner::new(Room::default(), AssetCatalog::builtin());
//!
//! // Pick a table from the palette and drop it where the pointer hits.
//! assert!(planner.start_pending("Table"));
//! planner.pointer_moved(Vec3::new(2.0, 0.0, 1.0));
//! let placed = planner.confirm_pending().unwrap();
//! assert!(matches!(placed, PlacementEvent::Placed { .. }));
//! ```

pub mod geometry;
pub mod placement;
pub mod scene;
pub mod world;

// Re-export the types most hosts touch at crate level for convenience.
pub use geometry::{footprint_corners, OrientedBox, Transform};
pub use placement::{
    evaluate, floor_height, resolve, DragSession, DragState, Evaluation, Outcome,
    PendingPlacement, PlacementEvent, Planner, Tint,
};
pub use scene::{
    AssetCatalog, AssetId, AssetInstance, AssetKind, CatalogError, Collider, ColliderTag,
    SceneRegistry,
};
pub use world::Room;
