//! Preference configuration with environment overrides.
//!
//! Browser builds have no process environment, so `from_env` there always
//! yields the defaults. Native hosts (SSR servers, tests) may override.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::state::theme::Theme;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_DARK_CLASS: &str = "dark";

pub const STORAGE_KEY_VAR: &str = "THEME_STORAGE_KEY";
pub const DARK_CLASS_VAR: &str = "THEME_DARK_CLASS";
pub const DEFAULT_THEME_VAR: &str = "THEME_DEFAULT";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding the preference.
    pub storage_key: String,
    /// Class token toggled on the root element while dark.
    pub dark_class: String,
    /// Theme used when nothing valid is stored.
    pub default_theme: Theme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            default_theme: Theme::Light,
        }
    }
}

impl ThemeConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `THEME_STORAGE_KEY`: default `theme`
    /// - `THEME_DARK_CLASS`: default `dark`
    /// - `THEME_DEFAULT`: `light` (default) or `dark`
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] when `THEME_DEFAULT` is not a
    /// theme name or a key/class override is blank.
    pub fn from_env() -> Result<Self, ThemeError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ThemeConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ThemeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(key) = lookup(STORAGE_KEY_VAR) {
            config.storage_key = non_blank(STORAGE_KEY_VAR, key)?;
        }
        if let Some(class) = lookup(DARK_CLASS_VAR) {
            config.dark_class = non_blank(DARK_CLASS_VAR, class)?;
        }
        if let Some(raw) = lookup(DEFAULT_THEME_VAR) {
            config.default_theme = raw.trim().parse().map_err(|_| invalid(DEFAULT_THEME_VAR, &raw))?;
        }
        Ok(config)
    }
}

fn non_blank(var: &str, value: String) -> Result<String, ThemeError> {
    let trimmed = value.trim();
    // A class token may not contain whitespace either; DOMTokenList rejects it.
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return Err(invalid(var, &value));
    }
    Ok(trimmed.to_owned())
}

fn invalid(var: &str, value: &str) -> ThemeError {
    ThemeError::InvalidConfig { var: var.to_owned(), value: value.to_owned() }
}
