//! Gallery manifest: the portfolio's items as JSON.
//!
//! The browser build reads items straight from the rendered grid; the manifest
//! is the same content in file form, used by `folio-check` and the tests.

use serde::{Deserialize, Serialize};

use folio_gallery::{Catalog, GalleryItem, GroupId};

use crate::error::PageError;

/// Current manifest format version.
pub const MANIFEST_VERSION: u32 = 1;

/// Serialized gallery content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryManifest {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Group shown on page load; defaults to the first group
    #[serde(default)]
    pub initial_group: Option<GroupId>,
    /// Items in document order
    pub items: Vec<GalleryItem>,
}

fn default_version() -> u32 {
    MANIFEST_VERSION
}

impl GalleryManifest {
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let manifest: Self = serde_json::from_str(json)?;
        if manifest.version > MANIFEST_VERSION {
            return Err(PageError::VersionMismatch {
                expected: MANIFEST_VERSION,
                found: manifest.version,
            });
        }
        Ok(manifest)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PageError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build the catalog; blank captions fall back to the category tag.
    pub fn to_catalog(&self) -> Result<Catalog, PageError> {
        let items = self
            .items
            .iter()
            .cloned()
            .map(|item| {
                if item.caption.is_empty() {
                    let caption = item.category.clone();
                    item.with_caption(caption)
                } else {
                    item
                }
            })
            .collect();
        Ok(Catalog::new(items)?)
    }

    /// Group to show first: the declared one, else the first in the catalog.
    pub fn initial_group(&self, catalog: &Catalog) -> Option<GroupId> {
        self.initial_group
            .clone()
            .or_else(|| catalog.groups().into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "items": [
            { "id": "rose", "category": "realism", "group": "gallery-tattoos",
              "image": { "src": "img/rose.webp", "alt": "Rose" }, "caption": "Realismo" },
            { "id": "moth", "category": "blackwork", "group": "gallery-designs",
              "image": { "src": "img/moth.webp" } }
        ]
    }"#;

    #[test]
    fn test_manifest_to_catalog() {
        let manifest = GalleryManifest::from_json(MANIFEST).unwrap();
        assert_eq!(manifest.version, MANIFEST_VERSION);

        let catalog = manifest.to_catalog().unwrap();
        assert_eq!(catalog.len(), 2);

        let captions: Vec<&str> = catalog.iter().map(|i| i.caption.as_str()).collect();
        assert_eq!(captions, vec!["Realismo", "blackwork"]);
        assert_eq!(
            manifest.initial_group(&catalog),
            Some(GroupId::new("gallery-tattoos"))
        );
    }

    #[test]
    fn test_declared_initial_group_wins() {
        let json = r#"{ "initial_group": "gallery-designs", "items": [] }"#;
        let manifest = GalleryManifest::from_json(json).unwrap();
        let catalog = manifest.to_catalog().unwrap();
        assert_eq!(
            manifest.initial_group(&catalog),
            Some(GroupId::new("gallery-designs"))
        );
    }

    #[test]
    fn test_duplicate_ids_surface_as_gallery_error() {
        let json = r#"{ "items": [
            { "id": "a", "category": "x", "group": "g", "image": { "src": "a.jpg" } },
            { "id": "a", "category": "y", "group": "g", "image": { "src": "b.jpg" } }
        ] }"#;
        let manifest = GalleryManifest::from_json(json).unwrap();
        assert!(matches!(manifest.to_catalog(), Err(PageError::Gallery(_))));
    }

    #[test]
    fn test_newer_version_rejected() {
        let json = r#"{ "version": 99, "items": [] }"#;
        assert!(matches!(
            GalleryManifest::from_json(json),
            Err(PageError::VersionMismatch { found: 99, .. })
        ));
    }
}
