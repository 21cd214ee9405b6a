//! Dashboard configuration.
//!
//! The host page can override defaults with a JSON object in a `<meta>`
//! tag:
//!
//! ```html
//! <meta name="internals-dashboard-config"
//!       content='{ "title": "Storage", "log_level": "debug" }'>
//! ```
//!
//! Missing fields take their defaults. A configuration that fails to parse
//! is reported and replaced by [`DashboardConfig::default`].

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// `name` of the `<meta>` tag carrying the configuration.
pub const CONFIG_META_NAME: &str = "internals-dashboard-config";

/// Errors raised while reading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration was not a valid JSON object of the expected shape
    #[error("Invalid dashboard configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// `log_level` did not name a `log` level
    #[error("Unknown log level: {0}")]
    LogLevel(String),
}

/// Settings for the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Heading shown in the hero header
    pub title: String,
    /// Line shown under the heading
    pub tagline: String,
    /// Minimum level forwarded to the browser console
    pub log_level: String,
    /// Whether the cookie card is rendered
    pub show_cookies: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Browser Internals Dashboard".into(),
            tagline: "Inspect client-side storage, environment, and performance metrics in real time."
                .into(),
            log_level: "info".into(),
            show_cookies: true,
        }
    }
}

impl DashboardConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configured console log level.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Read the configuration from the host document, falling back to
    /// defaults when the tag is absent or invalid.
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                document
                    .query_selector(&format!("meta[name=\"{CONFIG_META_NAME}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"));

        match content {
            Some(json) => Self::from_json(&json).unwrap_or_else(|error| {
                tracing::warn!(%error, "Ignoring dashboard configuration");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_fills_missing_fields_with_defaults() -> Result<()> {
        let config = DashboardConfig::from_json(r#"{ "title": "Storage" }"#)?;

        assert_eq!(
            config,
            DashboardConfig {
                title: "Storage".into(),
                ..DashboardConfig::default()
            }
        );
        assert_eq!(DashboardConfig::from_json("{}")?, DashboardConfig::default());
        Ok(())
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_rejects_malformed_json() {
        assert!(matches!(
            DashboardConfig::from_json("{ title: "),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{ "show_cookies": "yes" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_parses_log_levels() -> Result<()> {
        assert_eq!(DashboardConfig::default().log_level()?, log::Level::Info);

        let config = DashboardConfig::from_json(r#"{ "log_level": "DEBUG" }"#)?;
        assert_eq!(config.log_level()?, log::Level::Debug);

        let config = DashboardConfig::from_json(r#"{ "log_level": "loud" }"#)?;
        assert!(matches!(config.log_level(), Err(ConfigError::LogLevel(_))));
        Ok(())
    }
}
