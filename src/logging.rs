//! Logger setup for the browser and native builds.

use crate::config::LogLevel;

/// Install the platform logger at `level`.
///
/// The browser build logs to the devtools console, the native build to
/// stderr. Calling this twice keeps the first logger.
pub fn init_logging(level: LogLevel) {
    #[cfg(target_arch = "wasm32")]
    {
        if console_log::init_with_level(level.to_level()).is_err() {
            log::set_max_level(level.to_level_filter());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = env_logger::Builder::new()
            .filter_level(level.to_level_filter())
            .format_timestamp(None)
            .try_init();
    }

    log::debug!("Logging initialized at {:?}", level);
}
