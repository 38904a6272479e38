//! Asset Catalog
//!
//! Immutable descriptions of the asset kinds a user can place.  Kinds are
//! shared by reference across every placed instance.  The catalog can be
//! loaded from / saved to a JSON index file for host-defined palettes.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A catalog entry describing one kind of placeable asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetKind {
    /// Human-readable display name.
    pub label: String,
    /// Box dimensions (width, height, depth), each positive.
    pub dimension: Vec3,
    /// Display color as a hex string (e.g. `"#9577c7"`).
    pub color: String,
    /// Optional external model reference.  Purely visual - collision always
    /// uses `dimension`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl AssetKind {
    pub fn new(label: &str, dimension: Vec3, color: &str) -> Self {
        Self {
            label: label.to_string(),
            dimension,
            color: color.to_string(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }
}

/// Errors that can occur loading or saving a catalog index.
#[derive(Debug)]
pub enum CatalogError {
    /// Underlying filesystem error.
    Io(std::io::Error),
    /// Malformed index contents.
    Json(serde_json::Error),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "IO error: {e}"),
            CatalogError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Json(e)
    }
}

/// Ordered collection of asset kinds available to place.
#[derive(Clone, Debug, Default)]
pub struct AssetCatalog {
    kinds: Vec<Arc<AssetKind>>,
}

impl AssetCatalog {
    pub fn new(kinds: Vec<AssetKind>) -> Self {
        Self {
            kinds: kinds.into_iter().map(Arc::new).collect(),
        }
    }

    /// The stock palette.
    pub fn builtin() -> Self {
        Self::new(vec![
            AssetKind::new("Table", Vec3::new(2.0, 2.0, 3.0), "#9577c7").with_model("table"),
            AssetKind::new("Clock", Vec3::new(1.0, 1.0, 0.5), "#228c27").with_model("clock"),
            AssetKind::new("Shelves", Vec3::new(3.0, 4.0, 1.0), "#4cea92").with_model("shelves"),
            AssetKind::new("Plant", Vec3::new(1.0, 1.0, 1.0), "#58bbce").with_model("plant"),
        ])
    }

    /// Look a kind up by label.
    pub fn kind(&self, label: &str) -> Option<&Arc<AssetKind>> {
        self.kinds.iter().find(|kind| kind.label == label)
    }

    pub fn kinds(&self) -> &[Arc<AssetKind>] {
        &self.kinds
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Parse a catalog from a JSON array of kinds.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let kinds: Vec<AssetKind> = serde_json::from_str(json)?;
        Ok(Self::new(kinds))
    }

    /// Serialize the catalog to a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let kinds: Vec<&AssetKind> = self.kinds.iter().map(|kind| kind.as_ref()).collect();
        Ok(serde_json::to_string_pretty(&kinds)?)
    }

    /// Load a catalog index from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Save the catalog index to disk.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
