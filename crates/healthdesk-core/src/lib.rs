//! # healthdesk-core
//!
//! The day-indexed health metrics store.
//!
//! This crate provides:
//! - The `KeyValueStore` trait, the seam to whatever medium persists history
//! - `HealthMetricsStore`, which owns the history, resolves defaults, and
//!   derives the comparison and summary series
//!
//! ## Usage
//!
//! ```rust,ignore
//! use healthdesk_core::{HealthMetricsStore, DEFAULT_STORAGE_KEY};
//!
//! let mut store = HealthMetricsStore::load(Box::new(backend), DEFAULT_STORAGE_KEY, today);
//! store.set_field(today, MetricField::Steps, "8000")?;
//! let series = store.comparison_series(MetricField::Steps);
//! ```

pub mod store;
pub mod traits;

pub use store::{HealthMetricsStore, DEFAULT_STORAGE_KEY};
