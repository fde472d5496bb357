//! # theme-preference
//!
//! Persisted light/dark theme preference for Leptos + WASM frontends.
//!
//! The preference is one observable value. Every write is persisted to
//! origin-scoped `localStorage` under `"theme"` and mirrored onto the
//! document root as the `dark` class token, which downstream CSS keys off.
//! Storage and DOM access go through capability traits so the same code runs
//! in the browser, during SSR (where both are absent), and under test fakes.

pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

pub use config::ThemeConfig;
pub use error::ThemeError;
pub use state::observable::{Observable, Subscription};
pub use state::preference::ThemePreference;
pub use state::theme::Theme;
pub use util::dom::{DomSync, MemoryRoot};
pub use util::environment::{Environment, Unavailable};
pub use util::storage::{MemoryStore, PersistentStore};
