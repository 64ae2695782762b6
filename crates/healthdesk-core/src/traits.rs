//! Persistence seam for the metrics store.
//!
//! The store never touches a filesystem or browser API directly. It is handed
//! a `KeyValueStore` at construction and reads or replaces a single string
//! value under one key.

use healthdesk_contracts::error::HealthDeskResult;

/// A string key-value medium with whole-value replace semantics.
///
/// Implementations must make `set` atomic with respect to `get`: a reader
/// sees either the previous value or the new one, never a partial write.
/// Concurrent writers are last-writer-wins.
pub trait KeyValueStore: Send + Sync {
    /// Return the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> HealthDeskResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> HealthDeskResult<()>;
}
