//! # healthdesk-storage
//!
//! `KeyValueStore` backends for the HealthDesk metrics store.
//!
//! - [`InMemoryKeyValueStore`]: a shared `HashMap`, for tests and throwaway
//!   sessions.
//! - [`FileKeyValueStore`]: one JSON file per key with atomic replace.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use healthdesk_core::{HealthMetricsStore, DEFAULT_STORAGE_KEY};
//! use healthdesk_storage::FileKeyValueStore;
//!
//! let backend = FileKeyValueStore::open(".healthdesk")?;
//! let store = HealthMetricsStore::load(Box::new(backend), DEFAULT_STORAGE_KEY, today);
//! ```

pub mod file;
pub mod memory;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;

// ── Tests ─────────────────────────────────────────────────────────────────────
