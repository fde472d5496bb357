//! Persistent key/value storage capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is origin-scoped `localStorage`. During SSR there is
//! no window, so `is_available` reports false and callers skip storage
//! entirely. `MemoryStore` stands in for tests and headless hosts.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeError;

/// Durable string key/value store.
pub trait PersistentStore {
    /// Environment guard: whether this store can be touched at all.
    fn is_available(&self) -> bool;

    /// Read `key`; `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Backend failure, e.g. storage disabled by the browser.
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Write `value` under `key`, overwriting unconditionally.
    ///
    /// # Errors
    ///
    /// Backend failure, e.g. quota exceeded.
    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

#[derive(Debug, Default)]
struct MemoryEntries {
    items: HashMap<String, String>,
    writes: usize,
}

/// In-memory store. Clones share contents, so a test can keep one handle
/// while the preference owns another.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    entries: Rc<RefCell<MemoryEntries>>,
    available: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Rc::default(), available: true }
    }

    /// A store that reports itself unavailable, as during SSR.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { available: false, ..Self::new() }
    }

    /// Pre-populate `key` without counting it as a write.
    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().items.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Stored value for `key`, bypassing the availability guard.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().items.get(key).cloned()
    }

    /// Number of `set_item` calls that reached this store.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.entries.borrow().writes
    }
}

impl PersistentStore for MemoryStore {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.peek(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut entries = self.entries.borrow_mut();
        entries.items.insert(key.to_owned(), value.to_owned());
        entries.writes += 1;
        Ok(())
    }
}

/// Browser `localStorage` for the current origin.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, ThemeError> {
        let window =
            web_sys::window().ok_or_else(|| ThemeError::StorageUnavailable("no window".to_owned()))?;
        window
            .local_storage()
            .map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))?
            .ok_or_else(|| ThemeError::StorageUnavailable("localStorage is disabled".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
impl PersistentStore for LocalStorage {
    fn is_available(&self) -> bool {
        web_sys::window().is_some()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ThemeError::StorageRead { key: key.to_owned(), reason: format!("{e:?}") })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::StorageWrite { key: key.to_owned(), reason: format!("{e:?}") })
    }
}
