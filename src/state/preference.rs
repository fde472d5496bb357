//! Theme preference: observable value, persistence, and root class sync.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ThemePreference` is built during app startup. Construction reads the
//! stored theme and registers two sync subscribers ahead of anything else:
//! persistence first, then the root class toggle. Like every subscriber they
//! run once at registration and again on every write, so the DOM reflects the
//! stored value from the first paint on.
//!
//! TRADE-OFFS
//! ==========
//! A failing side effect does not cut the chain short. The value is written,
//! every subscriber runs, and the first sync error is handed back to the
//! outermost `set` caller. Boot-time failures are logged and degrade to the
//! configured default so a broken `localStorage` never blocks startup.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::state::observable::{Observable, Subscription};
use crate::state::theme::Theme;
use crate::util::dom::{DomSync, apply_theme};
use crate::util::environment::Environment;
use crate::util::storage::PersistentStore;

type FailureSlot = Rc<RefCell<Option<ThemeError>>>;

pub struct ThemePreference {
    config: ThemeConfig,
    value: Observable<Theme>,
    store: Rc<dyn PersistentStore>,
    failure: FailureSlot,
    _sync: [Subscription<Theme>; 2],
}

impl ThemePreference {
    /// Build the preference over explicit capabilities.
    pub fn new(config: ThemeConfig, store: Rc<dyn PersistentStore>, dom: Rc<dyn DomSync>) -> Self {
        let initial = boot_read(&config, store.as_ref());
        let value = Observable::new(initial);
        let failure: FailureSlot = Rc::default();

        let persist = value.subscribe(persist_on_change(
            config.storage_key.clone(),
            Rc::clone(&store),
            Rc::clone(&failure),
        ));
        let apply = value.subscribe(apply_on_change(config.dark_class.clone(), dom, Rc::clone(&failure)));
        if let Some(err) = failure.borrow_mut().take() {
            log::warn!("initial theme sync failed, continuing with {initial}: {err}");
        }

        Self { config, value, store, failure, _sync: [persist, apply] }
    }

    /// Build the preference over the capabilities of the detected host.
    pub fn for_environment(config: ThemeConfig) -> Self {
        let env = Environment::detect();
        log::debug!("theme preference environment: {env:?}");
        Self::new(config, env.store(), env.dom())
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn get_current(&self) -> Theme {
        self.value.get()
    }

    /// Write `theme`, persist it, sync the root class, and notify every
    /// subscriber before returning.
    ///
    /// A call made from inside a subscriber updates the value at once, queues
    /// its notification behind the running round, and always returns `Ok`;
    /// its sync errors reach the outer caller.
    ///
    /// # Errors
    ///
    /// The first persistence or DOM error raised while the write propagated.
    pub fn set(&self, theme: Theme) -> Result<(), ThemeError> {
        let nested = self.value.is_notifying();
        if !nested {
            // Left over if a subscriber panicked out of the previous round.
            *self.failure.borrow_mut() = None;
        }
        log::info!("theme changed to: {theme}");
        self.value.set(theme);
        if nested {
            return Ok(());
        }
        self.failure.borrow_mut().take().map_or(Ok(()), Err)
    }

    /// Parse a host-supplied string and [`set`](Self::set) it.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidValue`] for anything but `light`/`dark`, in which
    /// case nothing changes; otherwise as for `set`.
    pub fn set_str(&self, raw: &str) -> Result<(), ThemeError> {
        let theme: Theme = raw.parse()?;
        self.set(theme)
    }

    /// Switch to the other theme and return it.
    ///
    /// # Errors
    ///
    /// As for [`set`](Self::set).
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        let next = self.get_current().toggled();
        self.set(next)?;
        Ok(next)
    }

    /// Call `callback` with the current theme now and after every write.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<Theme>
    where
        F: Fn(Theme) + 'static,
    {
        self.value.subscribe(move |theme| callback(*theme))
    }

    /// Re-read the stored theme and set it, re-running persistence and the
    /// root class sync even when the value is unchanged.
    ///
    /// Without storage (SSR) this only returns the current value.
    ///
    /// # Errors
    ///
    /// Storage read failures, or as for [`set`](Self::set).
    pub fn initialize(&self) -> Result<Theme, ThemeError> {
        if !self.store.is_available() {
            log::debug!("no storage, skipping theme initialization");
            return Ok(self.get_current());
        }
        let stored = self.store.get_item(&self.config.storage_key)?;
        let theme = resolve_stored(&self.config, stored);
        log::info!("initializing theme with: {theme}");
        self.set(theme)?;
        Ok(theme)
    }
}

impl fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreference")
            .field("config", &self.config)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

fn boot_read(config: &ThemeConfig, store: &dyn PersistentStore) -> Theme {
    if !store.is_available() {
        return config.default_theme;
    }
    match store.get_item(&config.storage_key) {
        Ok(stored) => resolve_stored(config, stored),
        Err(err) => {
            log::warn!("could not read stored theme, using {}: {err}", config.default_theme);
            config.default_theme
        }
    }
}

/// Absent or invalid stored values fall back to the default.
fn resolve_stored(config: &ThemeConfig, stored: Option<String>) -> Theme {
    let Some(raw) = stored else {
        return config.default_theme;
    };
    raw.parse().unwrap_or_else(|err| {
        log::warn!("ignoring stored theme, using {}: {err}", config.default_theme);
        config.default_theme
    })
}

fn persist_on_change(key: String, store: Rc<dyn PersistentStore>, failure: FailureSlot) -> impl Fn(&Theme) {
    move |theme: &Theme| {
        if !store.is_available() {
            log::debug!("no storage, not persisting theme {theme}");
            return;
        }
        if let Err(err) = store.set_item(&key, theme.as_str()) {
            record(&failure, err);
        }
    }
}

fn apply_on_change(class: String, dom: Rc<dyn DomSync>, failure: FailureSlot) -> impl Fn(&Theme) {
    move |theme: &Theme| {
        if let Err(err) = apply_theme(dom.as_ref(), &class, *theme) {
            record(&failure, err);
        }
    }
}

fn record(failure: &FailureSlot, err: ThemeError) {
    log::warn!("theme sync failed: {err}");
    let mut slot = failure.borrow_mut();
    if slot.is_none() {
        *slot = Some(err);
    }
}
