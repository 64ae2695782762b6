//! File-backed implementation of `KeyValueStore`.
//!
//! Each key maps to one file `<data_dir>/<key>.json`. A write goes to a
//! `.tmp` sibling first and is then renamed over the target, so readers see
//! either the old value or the new one.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use healthdesk_contracts::error::{HealthDeskError, HealthDeskResult};
use healthdesk_core::traits::KeyValueStore;

/// A key-value store that keeps one JSON file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Open (and create if needed) the data directory at `data_dir`.
    pub fn open(data_dir: impl Into<PathBuf>) -> HealthDeskResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| HealthDeskError::StorageWriteFailed {
            key: data_dir.display().to_string(),
            reason: format!("failed to create data directory: {}", e),
        })?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file holding `key`.
    ///
    /// Keys are restricted to ASCII letters, digits, `_`, `-`, and `.` (not
    /// leading) so a key can never escape the data directory.
    pub fn path_for(&self, key: &str) -> HealthDeskResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(HealthDeskError::InvalidStorageKey {
                key: key.to_string(),
            });
        }
        Ok(self.data_dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> HealthDeskResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(key = %key, path = %path.display(), bytes = contents.len(), "value read");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HealthDeskError::StorageReadFailed {
                key: key.to_string(),
                reason: format!("{}: {}", path.display(), e),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> HealthDeskResult<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        let write_failed = |e: std::io::Error| HealthDeskError::StorageWriteFailed {
            key: key.to_string(),
            reason: format!("{}: {}", path.display(), e),
        };

        fs::write(&tmp, value).map_err(write_failed)?;
        fs::rename(&tmp, &path).map_err(write_failed)?;

        debug!(key = %key, path = %path.display(), bytes = value.len(), "value replaced");
        Ok(())
    }
}
