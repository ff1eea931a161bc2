//! folio - interaction layer for a single-page tattoo portfolio.
//!
//! Gallery filtering and the lightbox come from `folio_gallery`; this crate adds
//! the rest of the page (header, menu, hero, FAQ, counters, contact forms,
//! reveals, analytics) as plain state types, plus the browser binding that
//! wires all of it to the DOM.

pub mod accordion;
pub mod analytics;
pub mod config;
pub mod constants;
pub mod contact_form;
pub mod counter;
mod error;
pub mod hero;
pub mod logging;
pub mod manifest;
pub mod nav;
pub mod navbar;
pub mod reveal;

pub use error::PageError;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::start;
