//! Fallible browser facilities the behaviors depend on.
//!
//! Browsers may refuse `localStorage` (private mode, disabled cookies, sandboxed
//! iframes) and may lack `matchMedia`. Instead of catching exceptions ad hoc,
//! every access goes through these traits and returns a `Result`. Callers
//! decide the fallback, which is documented at each call site.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("{facility} access failed: {reason}")]
    Failed {
        facility: &'static str,
        reason: String,
    },
}

/// Durable per-origin key-value storage.
pub trait PreferenceStore {
    /// Read a value. `Ok(None)` means the key is unset.
    fn load(&self, key: &str) -> Result<Option<String>, AccessError>;

    fn save(&self, key: &str, value: &str) -> Result<(), AccessError>;
}

/// The system-level light/dark hint (`prefers-color-scheme`).
pub trait ColorSchemeQuery {
    /// Whether the system reports a light color-scheme preference.
    fn prefers_light(&self) -> Result<bool, AccessError>;
}
