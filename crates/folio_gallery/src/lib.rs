//! folio_gallery - gallery filtering and lightbox navigation without a DOM.
//!
//! The page's portfolio is a [`Catalog`] of [`GalleryItem`]s split into groups
//! (tattoos, designs, ...). A [`GallerySelector`] tracks the active group and
//! category filter and derives the ordered [`VisibleSet`]. A [`Lightbox`] pulls
//! that set when an item is activated, freezes it into a [`LightboxSession`]
//! and navigates it circularly, warming neighbouring images through an
//! [`ImagePreloader`].
//!
//! Nothing here touches the browser; the wasm binding in the root crate turns
//! DOM events into [`LightboxInput`]s and applies the returned updates.

mod error;
pub mod filter;
pub mod input;
pub mod lightbox;
pub mod model;
pub mod preload;
mod wrap;

#[cfg(test)]
mod tests;

pub use error::GalleryError;
pub use filter::{
    compute_visible_set, ActiveControl, CategoryFilter, EntryAnimation, FilterChange,
    FilterState, GallerySelector, ShownItem, VisibleSource, DEFAULT_STAGGER_STEP,
};
pub use input::{dispatch, Control, Key, LightboxInput, Transition};
pub use lightbox::{Lightbox, LightboxFrame, LightboxSession, LightboxState, LightboxUpdate};
pub use model::{Catalog, GalleryItem, GroupId, ImageRef, ItemId, VisibleSet};
pub use preload::{ImagePreloader, NoopPreloader};
pub use wrap::{next_index, prev_index};
