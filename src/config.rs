//! Page configuration.
//!
//! Every tunable of the page (scroll thresholds, animation timings, form
//! limits, log level) lives here with the page's stock values as defaults.
//! The browser build reads overrides from an optional
//! `<script type="application/json" id="folio-config">` block; missing fields
//! keep their defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Log level setting for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to log crate's Level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Id of the element carrying the JSON config in the page.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Scroll-reactive header settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub fixed_until: f64,
    pub hide_at: f64,
    pub show_at: f64,
    pub hide_delay_ms: u32,
    pub max_stretch: f64,
    /// Subtracted from anchor targets so headings clear the fixed navbar
    pub anchor_offset: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            fixed_until: constants::NAVBAR_FIXED_UNTIL,
            hide_at: constants::NAVBAR_HIDE_AT,
            show_at: constants::NAVBAR_SHOW_AT,
            hide_delay_ms: constants::NAVBAR_HIDE_DELAY_MS,
            max_stretch: constants::NAVBAR_MAX_STRETCH,
            anchor_offset: constants::ANCHOR_OFFSET,
        }
    }
}

/// Gallery and lightbox settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub stagger_step_ms: u64,
    pub filter_animation: String,
    /// Warm the images next to the one in the lightbox
    pub preload_neighbours: bool,
    /// Group shown when no selector button is marked active
    pub default_group: String,
}

impl GalleryConfig {
    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_step_ms)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            stagger_step_ms: constants::GALLERY_STAGGER_STEP_MS,
            filter_animation: constants::GALLERY_FILTER_ANIMATION.to_string(),
            preload_neighbours: true,
            default_group: constants::DEFAULT_GALLERY_GROUP.to_string(),
        }
    }
}

/// Scroll-triggered reveal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub elegant_threshold: f64,
    pub elegant_stagger_ms: u32,
    pub root_margin: String,
    pub stats_threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: constants::REVEAL_THRESHOLD,
            elegant_threshold: constants::ELEGANT_REVEAL_THRESHOLD,
            elegant_stagger_ms: constants::ELEGANT_REVEAL_STAGGER_MS,
            root_margin: constants::REVEAL_ROOT_MARGIN.to_string(),
            stats_threshold: constants::STATS_THRESHOLD,
        }
    }
}

/// Stat counter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: f64,
    pub frame_ms: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: constants::COUNTER_DURATION_MS,
            frame_ms: constants::COUNTER_FRAME_MS,
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub min_fill_ms: u64,
    pub max_attachments: usize,
    pub endpoint_host: String,
}

impl FormConfig {
    pub fn min_fill_time(&self) -> Duration {
        Duration::from_millis(self.min_fill_ms)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_fill_ms: constants::FORM_MIN_FILL_MS,
            max_attachments: constants::FORM_MAX_ATTACHMENTS,
            endpoint_host: constants::FORM_ENDPOINT_HOST.to_string(),
        }
    }
}

/// Hero section settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub parallax_speed: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            parallax_speed: constants::HERO_PARALLAX_SPEED,
        }
    }
}

/// Complete page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Version of the configuration format
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl PageConfig {
    /// Create a configuration with the stock values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            navbar: NavbarConfig::default(),
            gallery: GalleryConfig::default(),
            reveal: RevealConfig::default(),
            counter: CounterConfig::default(),
            form: FormConfig::default(),
            hero: HeroConfig::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Load configuration from a JSON file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Read the embedded config block, falling back to defaults.
    ///
    /// A malformed block is reported and ignored.
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_document(document: &web_sys::Document) -> Self {
        let Some(json) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            return Self::new();
        };

        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e).into(),
                );
                Self::new()
            }
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_values() {
        let config = PageConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.navbar.fixed_until, 300.0);
        assert_eq!(config.navbar.show_at, 850.0);
        assert_eq!(config.gallery.stagger_step(), Duration::from_millis(50));
        assert_eq!(config.form.max_attachments, 5);
        assert_eq!(config.form.min_fill_time(), Duration::from_secs(3));
        assert!(config.gallery.preload_neighbours);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = PageConfig::new();
        config.navbar.show_at = 900.0;
        config.log_level = LogLevel::Debug;

        let json = config.to_json().unwrap();
        let parsed = PageConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "gallery": { "stagger_step_ms": 80 }, "log_level": "warn" }"#;
        let config = PageConfig::from_json(json).unwrap();

        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.gallery.stagger_step_ms, 80);
        assert_eq!(config.gallery.filter_animation, "fadeInUp 0.5s ease");
        assert_eq!(config.navbar, NavbarConfig::default());
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_newer_version_rejected() {
        let json = format!(r#"{{ "version": {} }}"#, CONFIG_VERSION + 1);
        let err = PageConfig::from_json(&json).unwrap_err();
        assert!(matches!(err, ConfigError::VersionTooNew { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = PageConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
        assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
