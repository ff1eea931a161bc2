//! Error types for the page layer.

use folio_gallery::GalleryError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while wiring or running the page.
///
/// Event handlers log these and carry on; they never escape a handler.
#[derive(Error, Debug)]
pub enum PageError {
    /// A required element is not in the document
    #[error("Missing element: {selector}")]
    MissingElement {
        /// Selector or id that matched nothing
        selector: String,
    },

    /// A browser API call threw
    #[error("JavaScript error: {0}")]
    Js(String),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading a manifest or config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Page configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Gallery catalog could not be built
    #[error("Gallery error: {0}")]
    Gallery(#[from] GalleryError),

    /// Manifest declares a version this build does not read
    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Supported version
        expected: u32,
        /// Version in the file
        found: u32,
    },
}

impl PageError {
    /// Create a missing element error.
    pub fn missing_element(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Js(message)
    }
}
