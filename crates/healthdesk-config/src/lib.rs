//! # healthdesk-config
//!
//! TOML configuration for HealthDesk.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use healthdesk_config::HealthDeskConfig;
//!
//! let config = HealthDeskConfig::from_file(Path::new("healthdesk.toml"))?;
//! println!("history lives under key {}", config.storage.key);
//! ```
//!
//! An empty document is a valid configuration: every field has a default.

pub mod loader;
pub mod settings;

pub use settings::{HealthDeskConfig, LoggingConfig, StorageBackend, StorageConfig};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use healthdesk_contracts::error::HealthDeskError;

    use crate::{HealthDeskConfig, StorageBackend};

    /// An empty document yields every default.
    #[test]
    fn test_empty_document_uses_defaults() {
        let config = HealthDeskConfig::from_toml_str("").unwrap();
        assert_eq!(config, HealthDeskConfig::default());
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.data_dir, PathBuf::from(".healthdesk"));
        assert_eq!(config.storage.key, "healthData");
        assert_eq!(config.logging.filter, "warn");
    }

    /// Explicit values override defaults; omitted fields keep theirs.
    #[test]
    fn test_partial_document_overrides() {
        let toml = r#"
            [storage]
            backend = "memory"
            key = "mediTrack"

            [logging]
            filter = "debug"
        "#;

        let config = HealthDeskConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.key, "mediTrack");
        assert_eq!(config.storage.data_dir, PathBuf::from(".healthdesk"));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_unknown_backend_is_config_error() {
        let err = HealthDeskConfig::from_toml_str("[storage]\nbackend = \"cloud\"\n").unwrap_err();
        assert!(matches!(err, HealthDeskError::ConfigError { .. }));
    }

    #[test]
    fn test_unknown_field_is_config_error() {
        let err = HealthDeskConfig::from_toml_str("[storage]\nbakend = \"file\"\n").unwrap_err();
        match err {
            HealthDeskError::ConfigError { reason } => {
                assert!(reason.contains("failed to parse"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_storage_key_is_config_error() {
        let err = HealthDeskConfig::from_toml_str("[storage]\nkey = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("storage.key"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = HealthDeskConfig::from_file(Path::new("/nonexistent/healthdesk.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read configuration file"));
    }
}
