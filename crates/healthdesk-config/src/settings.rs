//! Configuration schema.
//!
//! Every table and field is optional; a missing value takes the default
//! documented on the field. Unknown fields are rejected so typos surface as
//! `ConfigError` instead of being silently ignored.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use healthdesk_core::DEFAULT_STORAGE_KEY;

/// Which `KeyValueStore` backend persists the metrics history.
///
/// Example in TOML:
/// ```toml
/// backend = "file"
/// backend = "memory"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

/// The `[storage]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Backend kind. Defaults to `file`.
    pub backend: StorageBackend,

    /// Directory for the file backend. Defaults to `.healthdesk`.
    pub data_dir: PathBuf,

    /// Key the history is stored under. Defaults to `healthData`.
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: PathBuf::from(".healthdesk"),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// The `[logging]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset. Defaults to `warn`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// The top-level structure deserialized from a TOML configuration file.
///
/// Example:
/// ```toml
/// [storage]
/// backend = "file"
/// data_dir = ".healthdesk"
/// key = "healthData"
///
/// [logging]
/// filter = "healthdesk_core=debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthDeskConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}
