//! Loading `HealthDeskConfig` from TOML.

use std::path::Path;

use tracing::debug;

use healthdesk_contracts::error::{HealthDeskError, HealthDeskResult};

use crate::settings::HealthDeskConfig;

impl HealthDeskConfig {
    /// Parse `s` as TOML configuration.
    ///
    /// Returns `HealthDeskError::ConfigError` if the TOML is malformed, has
    /// unknown fields, or names an empty storage key.
    pub fn from_toml_str(s: &str) -> HealthDeskResult<Self> {
        let config: HealthDeskConfig = toml::from_str(s).map_err(|e| HealthDeskError::ConfigError {
            reason: format!("failed to parse configuration TOML: {}", e),
        })?;

        if config.storage.key.trim().is_empty() {
            return Err(HealthDeskError::ConfigError {
                reason: "storage.key must not be empty".to_string(),
            });
        }

        debug!(
            backend = ?config.storage.backend,
            data_dir = %config.storage.data_dir.display(),
            key = %config.storage.key,
            "configuration parsed"
        );
        Ok(config)
    }

    /// Read the file at `path` and parse it as TOML configuration.
    ///
    /// Returns `HealthDeskError::ConfigError` if the file cannot be read or its
    /// contents are not a valid configuration.
    pub fn from_file(path: &Path) -> HealthDeskResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HealthDeskError::ConfigError {
            reason: format!("failed to read configuration file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }
}
