//! Client-side preference state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `theme` is the value type, `observable` the generic change-propagation
//! cell, and `preference` wires the two to storage and the root element.

pub mod observable;
pub mod preference;
pub mod theme;
