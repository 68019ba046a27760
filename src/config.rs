//! Configuration management
//!
//! Every field has a default, so a page only needs to provide the values it
//! wants to change. The browser binding reads overrides from an optional
//! `<script type="application/json" id="theme-config">` element.

use serde::Deserialize;

use crate::error::ThemeError;

/// Storage key holding the persisted theme
pub const STORAGE_KEY: &str = "theme";

/// Class placed on the root element while the dark theme is active
pub const DARK_CLASS: &str = "dark";

/// Id of the checkbox that switches themes
pub const TOGGLE_ID: &str = "theme-toggle";

/// Id of the optional JSON element carrying config overrides
pub const CONFIG_ELEMENT_ID: &str = "theme-config";

/// Media query answering "does the OS prefer dark?"
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_dark_class")]
    pub dark_class: String,

    #[serde(default = "default_toggle_id")]
    pub toggle_id: String,

    #[serde(default = "default_color_scheme_query")]
    pub color_scheme_query: String,
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

fn default_dark_class() -> String {
    DARK_CLASS.to_string()
}

fn default_toggle_id() -> String {
    TOGGLE_ID.to_string()
}

fn default_color_scheme_query() -> String {
    PREFERS_DARK_QUERY.to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            dark_class: default_dark_class(),
            toggle_id: default_toggle_id(),
            color_scheme_query: default_color_scheme_query(),
        }
    }
}

impl ThemeConfig {
    /// Parse overrides from JSON and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the DOM APIs would throw on.
    ///
    /// `classList.add` fails for empty or whitespace-containing tokens, and an
    /// empty storage key or element id can never match anything.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.storage_key.is_empty() {
            return Err(ThemeError::InvalidConfig("storage_key is empty".into()));
        }
        if self.dark_class.is_empty() || self.dark_class.chars().any(char::is_whitespace) {
            return Err(ThemeError::InvalidConfig(format!(
                "dark_class '{}' is not a valid class token",
                self.dark_class
            )));
        }
        if self.toggle_id.is_empty() {
            return Err(ThemeError::InvalidConfig("toggle_id is empty".into()));
        }
        if self.color_scheme_query.trim().is_empty() {
            return Err(ThemeError::InvalidConfig(
                "color_scheme_query is empty".into(),
            ));
        }
        Ok(())
    }
}
