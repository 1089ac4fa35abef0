//! Application Configuration
//!
//! Read once at startup from `<meta>` tags in `index.html`:
//!
//! ```html
//! <meta name="restaurant-api-base" content="/api">
//! <meta name="restaurant-log-level" content="debug">
//! ```

use log::{Level, LevelFilter};

const API_BASE_META: &str = "restaurant-api-base";
const LOG_LEVEL_META: &str = "restaurant-log-level";
const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for the `/restaurants` resource
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from raw meta values; blank or unparsable values fall back to defaults.
    pub fn from_values(api_base: Option<String>, log_level: Option<String>) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_base);
        let log_level = log_level
            .and_then(|v| v.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);
        Self { api_base, log_level }
    }

    /// Level handed to `console_log`. `off` still needs a level there; the
    /// max level filter silences it.
    pub fn console_level(&self) -> Level {
        self.log_level.to_level().unwrap_or(Level::Error)
    }

    /// Read from the current document.
    pub fn from_document() -> Self {
        Self::from_values(read_meta(API_BASE_META), read_meta(LOG_LEVEL_META))
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!(r#"meta[name="{}"]"#, name))
        .ok()??;
    element.get_attribute("content")
}
