//! Console logging for the browser build.
//!
//! Library code logs through `tracing`, which forwards to the `log` facade
//! when no subscriber is installed; `console_log` writes those records to
//! the browser console.

use crate::config::DashboardConfig;

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init(config: &DashboardConfig) {
    console_error_panic_hook::set_once();

    let (level, invalid) = match config.log_level() {
        Ok(level) => (level, None),
        Err(error) => (log::Level::Info, Some(error)),
    };

    if console_log::init_with_level(level).is_err() {
        // A logger is already installed
        return;
    }

    if let Some(error) = invalid {
        tracing::warn!(%error, "Falling back to info level");
    }
    tracing::debug!(%level, "Console logging enabled");
}
