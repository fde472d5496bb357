//! Error taxonomy for theme persistence and DOM sync.

/// Error returned by preference operations and capability backends.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// A window exists but `localStorage` is disabled or missing.
    #[error("local storage unavailable: {0}")]
    StorageUnavailable(String),
    /// Reading the stored preference failed.
    #[error("failed to read `{key}` from storage: {reason}")]
    StorageRead { key: String, reason: String },
    /// Writing the preference failed (quota, security policy).
    #[error("failed to write `{key}` to storage: {reason}")]
    StorageWrite { key: String, reason: String },
    /// The root element's class list could not be updated.
    #[error("failed to update root element classes: {0}")]
    Dom(String),
    /// A string that names neither `light` nor `dark`.
    #[error("invalid theme value: {0:?}")]
    InvalidValue(String),
    /// An environment override could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidConfig { var: String, value: String },
}
