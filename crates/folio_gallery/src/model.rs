//! Gallery data model: items, the catalog that owns them, and visible sets.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// Stable identity of a gallery item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identity of a top-level gallery collection (e.g. `gallery-tattoos`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Image resource of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Image URI
    pub src: String,
    /// Alternative text
    #[serde(default)]
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// One displayable portfolio piece.
///
/// Immutable once it is part of a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Unique identity
    pub id: ItemId,
    /// Category tag used by the filter (e.g. "realism")
    pub category: String,
    /// Gallery collection this item belongs to
    pub group: GroupId,
    /// Image shown in the grid and the lightbox
    pub image: ImageRef,
    /// Caption shown under the lightbox image (the category's display label)
    #[serde(default)]
    pub caption: String,
}

impl GalleryItem {
    /// Create an item whose caption is its category tag.
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        group: impl Into<String>,
        image: ImageRef,
    ) -> Self {
        let category = category.into();
        Self {
            id: ItemId::new(id),
            caption: category.clone(),
            category,
            group: GroupId::new(group),
            image,
        }
    }

    /// Replace the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }
}

/// The page's full, ordered content set.
///
/// Items keep document order; the catalog is the only owner of item data and
/// visible sets share it through `Rc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Rc<GalleryItem>>,
}

impl Catalog {
    /// Build a catalog, rejecting blank fields and duplicate ids.
    pub fn new(items: Vec<GalleryItem>) -> Result<Self, GalleryError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.as_str().is_empty() {
                return Err(GalleryError::empty_field("", "id"));
            }
            if item.group.as_str().is_empty() {
                return Err(GalleryError::empty_field(item.id.as_str(), "group"));
            }
            if item.image.src.is_empty() {
                return Err(GalleryError::empty_field(item.id.as_str(), "image source"));
            }
            if !seen.insert(item.id.clone()) {
                return Err(GalleryError::duplicate_item(item.id.as_str()));
            }
        }

        Ok(Self {
            items: items.into_iter().map(Rc::new).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<GalleryItem>> {
        self.items.iter()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&Rc<GalleryItem>> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Groups in order of first appearance.
    pub fn groups(&self) -> Vec<GroupId> {
        let mut groups: Vec<GroupId> = Vec::new();
        for item in &self.items {
            if !groups.contains(&item.group) {
                groups.push(item.group.clone());
            }
        }
        groups
    }

    /// Distinct categories of a group, in order of first appearance.
    pub fn categories(&self, group: &GroupId) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in self.items.iter().filter(|item| &item.group == group) {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }
}

/// Ordered subset of the catalog currently eligible for display and navigation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleSet {
    items: Vec<Rc<GalleryItem>>,
}

impl VisibleSet {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index).map(|item| item.as_ref())
    }

    /// Position of an item in the set, if it is visible.
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter().map(|item| item.as_ref())
    }

    /// Ids in set order.
    pub fn ids(&self) -> Vec<&ItemId> {
        self.items.iter().map(|item| &item.id).collect()
    }
}

impl FromIterator<Rc<GalleryItem>> for VisibleSet {
    fn from_iter<I: IntoIterator<Item = Rc<GalleryItem>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
