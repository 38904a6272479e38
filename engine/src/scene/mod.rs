//! Scene Module
//!
//! The data model behind a planning session: the shared asset catalog,
//! placed instances, and the registry that owns them and serves collider
//! snapshots to the placement engine.

pub mod catalog;
pub mod collider;
pub mod instance;
pub mod registry;

pub use catalog::{AssetCatalog, AssetKind, CatalogError};
pub use collider::{Collider, ColliderTag};
pub use instance::{AssetId, AssetInstance};
pub use registry::SceneRegistry;
