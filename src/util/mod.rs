//! Environment-facing helpers behind the preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from preference
//! logic so it can run under SSR and in native tests.

pub mod dom;
pub mod environment;
pub mod global;
pub mod storage;
