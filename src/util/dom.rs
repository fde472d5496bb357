//! Root element class sync.
//!
//! Mirrors the theme onto `<html>` as a single class token. CSS keys off its
//! presence; no other node is touched.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ThemeError;
use crate::state::theme::Theme;

/// Class list access on the document root element.
pub trait DomSync {
    /// Environment guard: whether a document is present.
    fn is_available(&self) -> bool;

    /// Add `token` when `force` is true, remove it otherwise.
    ///
    /// # Errors
    ///
    /// Backend failure, e.g. the document has no root element.
    fn toggle_class(&self, token: &str, force: bool) -> Result<(), ThemeError>;

    fn has_class(&self, token: &str) -> bool;

    /// Full class attribute of the root element.
    fn class_name(&self) -> String;
}

/// Apply `theme` to the root element: `class` present iff dark.
///
/// Idempotent. A no-op when the DOM guard is false.
///
/// # Errors
///
/// Propagates [`DomSync::toggle_class`] failures.
pub fn apply_theme(dom: &dyn DomSync, class: &str, theme: Theme) -> Result<(), ThemeError> {
    if !dom.is_available() {
        log::debug!("no document, skipping theme class sync for {theme}");
        return Ok(());
    }
    log::debug!("applying theme: {theme}");
    dom.toggle_class(class, theme.is_dark())?;
    log::debug!("{class} class applied: {}", dom.has_class(class));
    log::debug!("root classes: {:?}", dom.class_name());
    Ok(())
}

/// In-memory root element. Clones share the class list.
#[derive(Clone, Debug)]
pub struct MemoryRoot {
    classes: Rc<RefCell<Vec<String>>>,
    available: bool,
}

impl Default for MemoryRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRoot {
    #[must_use]
    pub fn new() -> Self {
        Self { classes: Rc::default(), available: true }
    }

    /// A root that reports no document, as during SSR.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { available: false, ..Self::new() }
    }

    /// Start from a whitespace-separated class attribute.
    #[must_use]
    pub fn with_classes(self, class_name: &str) -> Self {
        self.classes.borrow_mut().extend(class_name.split_whitespace().map(str::to_owned));
        self
    }

    /// How many times `token` appears in the class list.
    #[must_use]
    pub fn occurrences(&self, token: &str) -> usize {
        self.classes.borrow().iter().filter(|c| *c == token).count()
    }
}

impl DomSync for MemoryRoot {
    fn is_available(&self) -> bool {
        self.available
    }

    fn toggle_class(&self, token: &str, force: bool) -> Result<(), ThemeError> {
        let mut classes = self.classes.borrow_mut();
        if force {
            if !classes.iter().any(|c| c == token) {
                classes.push(token.to_owned());
            }
        } else {
            classes.retain(|c| c != token);
        }
        Ok(())
    }

    fn has_class(&self, token: &str) -> bool {
        self.occurrences(token) > 0
    }

    fn class_name(&self) -> String {
        self.classes.borrow().join(" ")
    }
}

/// `document.documentElement` of the current window.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

#[cfg(feature = "hydrate")]
impl DocumentRoot {
    fn root() -> Option<web_sys::Element> {
        web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element())
    }
}

#[cfg(feature = "hydrate")]
impl DomSync for DocumentRoot {
    fn is_available(&self) -> bool {
        web_sys::window().and_then(|w| w.document()).is_some()
    }

    fn toggle_class(&self, token: &str, force: bool) -> Result<(), ThemeError> {
        let root = Self::root().ok_or_else(|| ThemeError::Dom("document has no root element".to_owned()))?;
        root.class_list()
            .toggle_with_force(token, force)
            .map(|_| ())
            .map_err(|e| ThemeError::Dom(format!("{e:?}")))
    }

    fn has_class(&self, token: &str) -> bool {
        Self::root().is_some_and(|root| root.class_list().contains(token))
    }

    fn class_name(&self) -> String {
        Self::root().map(|root| root.class_name()).unwrap_or_default()
    }
}
