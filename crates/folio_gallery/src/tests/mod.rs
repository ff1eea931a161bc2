//! Scenario and property tests for gallery filtering and lightbox navigation.
//!
//! Properties are checked exhaustively over small catalogs instead of with a
//! random generator.

mod filter_tests;
mod navigation_tests;

use std::cell::RefCell;

use crate::model::{Catalog, GalleryItem, ImageRef};
use crate::preload::ImagePreloader;

/// Build an item with a predictable image path.
pub(crate) fn item(id: &str, category: &str, group: &str) -> GalleryItem {
    GalleryItem::new(
        id,
        category,
        group,
        ImageRef::new(format!("img/{id}.webp"), format!("Piece {id}")),
    )
}

/// Catalog of `n` realism tattoos named `i0..i{n-1}`.
pub(crate) fn ring(n: usize) -> Catalog {
    Catalog::new(
        (0..n)
            .map(|i| item(&format!("i{i}"), "realism", "gallery-tattoos"))
            .collect(),
    )
    .unwrap()
}

/// Two-group catalog mixing categories, in document order.
pub(crate) fn portfolio() -> Catalog {
    Catalog::new(vec![
        item("t-rose", "realism", "gallery-tattoos"),
        item("t-skull", "blackwork", "gallery-tattoos"),
        item("d-wolf", "realism", "gallery-designs"),
        item("t-eye", "realism", "gallery-tattoos"),
        item("d-moth", "blackwork", "gallery-designs"),
        item("t-raven", "blackwork", "gallery-tattoos"),
        item("d-koi", "ornamental", "gallery-designs"),
        item("t-hand", "ornamental", "gallery-tattoos"),
    ])
    .unwrap()
}

/// Preloader that remembers every requested source.
#[derive(Debug, Default)]
pub(crate) struct RecordingPreloader {
    pub requested: RefCell<Vec<String>>,
}

impl RecordingPreloader {
    pub fn take(&self) -> Vec<String> {
        self.requested.borrow_mut().drain(..).collect()
    }
}

impl ImagePreloader for RecordingPreloader {
    fn preload(&self, image: &ImageRef) {
        self.requested.borrow_mut().push(image.src.clone());
    }
}
