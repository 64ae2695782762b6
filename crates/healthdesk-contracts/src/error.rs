//! Error types for the HealthDesk workspace.
//!
//! All fallible operations return `HealthDeskResult<T>`. Variants carry the
//! offending value so CLI output and log lines are actionable on their own.

use thiserror::Error;

/// The unified error type for HealthDesk.
#[derive(Debug, Error)]
pub enum HealthDeskError {
    /// A date key was not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date key '{value}': {reason}")]
    InvalidDateKey { value: String, reason: String },

    /// A metric name did not match any editable field.
    #[error("unknown metric '{name}'")]
    UnknownMetric { name: String },

    /// A raw input value could not be parsed for the target field.
    ///
    /// The history is left untouched when this is returned.
    #[error("invalid value '{value}' for field '{field}': {reason}")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    /// A hospital category label did not match any known category.
    #[error("unknown hospital category '{name}'")]
    UnknownCategory { name: String },

    /// A free-text input that must carry content was blank.
    #[error("{what} must not be empty")]
    EmptyInput { what: String },

    /// A storage key contains characters the backend cannot address.
    #[error("invalid storage key '{key}'")]
    InvalidStorageKey { key: String },

    /// The storage backend failed to read a key.
    #[error("storage read failed for key '{key}': {reason}")]
    StorageReadFailed { key: String, reason: String },

    /// The storage backend failed to write a key.
    #[error("storage write failed for key '{key}': {reason}")]
    StorageWriteFailed { key: String, reason: String },

    /// The metrics history could not be serialized.
    #[error("serialization failed: {reason}")]
    SerializationFailed { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the HealthDesk crates.
pub type HealthDeskResult<T> = Result<T, HealthDeskError>;
