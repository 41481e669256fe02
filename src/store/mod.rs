//! Preference persistence.
//!
//! This module provides:
//!
//! - [`PreferenceStore`]: synchronous string key/value persistence trait
//! - [`MemoryStore`]: process-local store for tests and embedding
//! - [`FileStore`]: one-file-per-key store rooted at a directory
//! - [`StoreError`]: the failure taxonomy shared by implementations
//!
//! The controller persists the theme under [`THEME_KEY`] as the literal
//! strings `"light"` and `"dark"`, with no structured encoding around
//! them.

mod file;
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key holding the persisted theme value.
pub const THEME_KEY: &str = "theme";

/// Failure raised by a preference store.
///
/// Every variant is survivable; the controller logs and falls back
/// rather than surfacing these to callers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium cannot be used at all.
    #[error("preference storage unavailable: {reason}")]
    Unavailable { reason: String },
    /// Reading a key failed.
    #[error("failed to read preference '{key}'")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },
    /// Writing a key failed.
    #[error("failed to write preference '{key}'")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Synchronous string key/value persistence.
///
/// `Send` so a boxed store can travel into the process-wide controller.
pub trait PreferenceStore: Send {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_error_display() {
        let err = StoreError::Unavailable {
            reason: "quota exhausted".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unavailable"));
        assert!(msg.contains("quota exhausted"));
    }

    #[test]
    fn test_read_error_carries_key_and_source() {
        use std::error::Error;

        let err = StoreError::Read {
            key: "theme".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked"),
        };
        assert!(err.to_string().contains("theme"));
        assert!(err.source().is_some());
    }
}
