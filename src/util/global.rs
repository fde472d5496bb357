//! Session-wide preference instance and JS entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page has one theme. The instance is built lazily on first use from
//! `ThemeConfig::from_env` and the detected environment, and lives for the
//! rest of the session on the UI thread. Hydrated hosts call
//! `installConsoleLogging()` and then `initializeTheme()` once before first
//! paint.

#[cfg(test)]
#[path = "global_test.rs"]
mod global_test;

use crate::config::ThemeConfig;
use crate::state::preference::ThemePreference;

thread_local! {
    static PREFERENCE: ThemePreference = session_preference();
}

fn session_preference() -> ThemePreference {
    let config = ThemeConfig::from_env().unwrap_or_else(|err| {
        log::warn!("invalid theme config, using defaults: {err}");
        ThemeConfig::default()
    });
    ThemePreference::for_environment(config)
}

/// Run `f` against the session-wide preference.
pub fn with_preference<R>(f: impl FnOnce(&ThemePreference) -> R) -> R {
    PREFERENCE.with(f)
}

/// Route `log` output to the browser console and install the panic hook.
#[cfg(feature = "hydrate")]
pub fn install_console_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}

#[cfg(feature = "hydrate")]
mod js {
    use wasm_bindgen::prelude::*;

    use super::with_preference;
    use crate::error::ThemeError;
    use crate::state::preference::ThemePreference;

    fn to_js(err: ThemeError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    /// Re-read the stored theme and re-apply it to the document.
    #[wasm_bindgen(js_name = initializeTheme)]
    pub fn initialize_theme() -> Result<String, JsValue> {
        with_preference(ThemePreference::initialize)
            .map(|theme| theme.as_str().to_owned())
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = currentTheme)]
    pub fn current_theme() -> String {
        with_preference(ThemePreference::get_current).as_str().to_owned()
    }

    /// Set the theme from `"light"` or `"dark"`; anything else throws.
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(value: &str) -> Result<(), JsValue> {
        with_preference(|pref| pref.set_str(value)).map_err(to_js)
    }

    /// Send diagnostic lines to the browser console. Call before
    /// `initializeTheme()` to see its trace.
    #[wasm_bindgen(js_name = installConsoleLogging)]
    pub fn install_console_logging_js() {
        super::install_console_logging(log::Level::Debug);
    }

    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme() -> Result<String, JsValue> {
        with_preference(ThemePreference::toggle)
            .map(|theme| theme.as_str().to_owned())
            .map_err(to_js)
    }
}
