//! Leptos components bound to the session-wide theme preference.

pub mod theme_toggle;
