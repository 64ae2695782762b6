//! In-memory implementation of `KeyValueStore`.
//!
//! `InMemoryKeyValueStore` keeps every value in a `HashMap` behind an
//! `Arc<Mutex<_>>`. Clones share the same map, so a handle kept outside the
//! metrics store can inspect what was written or seed a second store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use healthdesk_contracts::error::{HealthDeskError, HealthDeskResult};
use healthdesk_core::traits::KeyValueStore;

/// A process-local key-value store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    pub(crate) values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    ///
    /// A poisoned lock still counts the keys written before the panic.
    pub fn len(&self) -> usize {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> HealthDeskResult<Option<String>> {
        let values = self.values.lock().map_err(|e| HealthDeskError::StorageReadFailed {
            key: key.to_string(),
            reason: format!("storage lock poisoned: {}", e),
        })?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> HealthDeskResult<()> {
        let mut values = self.values.lock().map_err(|e| HealthDeskError::StorageWriteFailed {
            key: key.to_string(),
            reason: format!("storage lock poisoned: {}", e),
        })?;
        values.insert(key.to_string(), value.to_string());

        debug!(key = %key, bytes = value.len(), "in-memory value replaced");
        Ok(())
    }
}
