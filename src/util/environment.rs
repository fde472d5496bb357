//! Host environment detection.
//!
//! TRADE-OFFS
//! ==========
//! Detection picks capability objects once; the browser capabilities still
//! re-check for a window on every call, so a preference constructed before
//! the document exists degrades to in-memory only instead of failing.

#[cfg(test)]
#[path = "environment_test.rs"]
mod environment_test;

use std::rc::Rc;

use crate::error::ThemeError;
use crate::util::dom::DomSync;
use crate::util::storage::PersistentStore;

/// Where the preference is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// A browser window with a document and `localStorage`.
    Browser,
    /// SSR, native tests, or any host without a document.
    Headless,
}

impl Environment {
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            if web_sys::window().is_some() {
                return Self::Browser;
            }
        }
        Self::Headless
    }

    /// Storage capability for this environment.
    #[must_use]
    pub fn store(self) -> Rc<dyn PersistentStore> {
        match self {
            #[cfg(feature = "hydrate")]
            Self::Browser => Rc::new(crate::util::storage::LocalStorage),
            #[cfg(not(feature = "hydrate"))]
            Self::Browser => Rc::new(Unavailable),
            Self::Headless => Rc::new(Unavailable),
        }
    }

    /// DOM capability for this environment.
    #[must_use]
    pub fn dom(self) -> Rc<dyn DomSync> {
        match self {
            #[cfg(feature = "hydrate")]
            Self::Browser => Rc::new(crate::util::dom::DocumentRoot),
            #[cfg(not(feature = "hydrate"))]
            Self::Browser => Rc::new(Unavailable),
            Self::Headless => Rc::new(Unavailable),
        }
    }
}

/// Capability for hosts with neither storage nor a document. The guard is
/// always false, so nothing below it is ever reached by the preference.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unavailable;

impl PersistentStore for Unavailable {
    fn is_available(&self) -> bool {
        false
    }

    fn get_item(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Ok(())
    }
}

impl DomSync for Unavailable {
    fn is_available(&self) -> bool {
        false
    }

    fn toggle_class(&self, _token: &str, _force: bool) -> Result<(), ThemeError> {
        Ok(())
    }

    fn has_class(&self, _token: &str) -> bool {
        false
    }

    fn class_name(&self) -> String {
        String::new()
    }
}
