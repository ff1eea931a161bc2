//! Error types for building a gallery catalog.

use thiserror::Error;

/// Errors that can occur while assembling the gallery catalog.
///
/// Navigation itself never fails; these only guard the static content set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// Two items share the same identity
    #[error("Duplicate gallery item id: {id}")]
    DuplicateItem {
        /// The repeated id
        id: String,
    },

    /// A required item field is blank
    #[error("Gallery item '{id}' has an empty {field}")]
    EmptyField {
        /// Id of the offending item (may itself be empty)
        id: String,
        /// Name of the blank field
        field: &'static str,
    },
}

impl GalleryError {
    /// Create a duplicate item error.
    pub fn duplicate_item(id: impl Into<String>) -> Self {
        Self::DuplicateItem { id: id.into() }
    }

    /// Create an empty field error.
    pub fn empty_field(id: impl Into<String>, field: &'static str) -> Self {
        Self::EmptyField {
            id: id.into(),
            field,
        }
    }
}
