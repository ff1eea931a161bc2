//! Best-effort warming of images adjacent to the one on screen.

use crate::model::{ImageRef, VisibleSet};
use crate::wrap::{next_index, prev_index};

/// Issues a background fetch for an image without rendering it.
///
/// Implementations are fire-and-forget: nothing is returned and failures are
/// the implementation's to swallow.
pub trait ImagePreloader {
    fn preload(&self, image: &ImageRef);
}

/// Preloader that does nothing (headless use, or preloading disabled).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPreloader;

impl ImagePreloader for NoopPreloader {
    fn preload(&self, _image: &ImageRef) {}
}

impl<P: ImagePreloader + ?Sized> ImagePreloader for &P {
    fn preload(&self, image: &ImageRef) {
        (**self).preload(image)
    }
}

impl<P: ImagePreloader + ?Sized> ImagePreloader for Box<P> {
    fn preload(&self, image: &ImageRef) {
        (**self).preload(image)
    }
}

/// Indices worth warming around `current`: previous then next, each wrapped.
///
/// The current index is skipped and a neighbour reached from both sides
/// (rings of two) is listed once.
pub fn adjacent_indices(current: usize, len: usize) -> Vec<usize> {
    let mut indices = Vec::with_capacity(2);
    if len == 0 {
        return indices;
    }

    for index in [prev_index(current, len), next_index(current, len)] {
        if index != current && !indices.contains(&index) {
            indices.push(index);
        }
    }
    indices
}

/// Images to warm around `current` in `set`.
pub fn adjacent_images(set: &VisibleSet, current: usize) -> Vec<ImageRef> {
    adjacent_indices(current, set.len())
        .into_iter()
        .filter_map(|index| set.get(index).map(|item| item.image.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_indices_wrap() {
        assert_eq!(adjacent_indices(0, 5), vec![4, 1]);
        assert_eq!(adjacent_indices(4, 5), vec![3, 0]);
        assert_eq!(adjacent_indices(2, 5), vec![1, 3]);
    }

    #[test]
    fn test_adjacent_indices_small_rings() {
        assert!(adjacent_indices(0, 0).is_empty());
        assert!(adjacent_indices(0, 1).is_empty());
        assert_eq!(adjacent_indices(0, 2), vec![1]);
        assert_eq!(adjacent_indices(1, 2), vec![0]);
        assert_eq!(adjacent_indices(1, 3), vec![0, 2]);
    }
}
