//! In-memory preference store.

use std::collections::HashMap;

use super::{PreferenceStore, StoreError};

/// Store backed by a process-local map.
///
/// # Example
///
/// ```rust
/// use nightswitch::store::{MemoryStore, PreferenceStore, THEME_KEY};
///
/// let mut store = MemoryStore::new().seed(THEME_KEY, "dark");
/// assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a key, returning the store for chaining.
    pub fn seed(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Returns true when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
