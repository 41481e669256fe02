//! File-backed preference store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{PreferenceStore, StoreError};

/// Store keeping one file per key under a root directory.
///
/// Values are written with a trailing newline and trimmed on read, so
/// hand-edited files keep working. The root directory is created on the
/// first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a store under the user's configuration directory,
    /// namespaced by `app`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the platform exposes no
    /// configuration directory.
    pub fn in_user_config(app: &str) -> Result<Self, StoreError> {
        let base = dirs::config_dir().ok_or_else(|| StoreError::Unavailable {
            reason: "no user configuration directory".to_string(),
        })?;
        Ok(Self::new(base.join(app)))
    }

    /// Root directory holding the preference files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(raw) => Ok(Some(raw.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|e| StoreError::Write {
            key: key.to_string(),
            source: e,
        })?;
        fs::write(self.key_path(key), format!("{}\n", value)).map_err(|e| StoreError::Write {
            key: key.to_string(),
            source: e,
        })
    }
}
