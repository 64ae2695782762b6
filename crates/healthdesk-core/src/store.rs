//! The health metrics store.
//!
//! `HealthMetricsStore` owns a day-indexed `MetricsHistory`, loads it once
//! from a `KeyValueStore`, and writes the whole mapping back after every
//! edit. Reads of dates that were never edited resolve to
//! `DailyMetrics::default()` without storing anything.
//!
//! "Today" is injected at construction; the store never reads a clock.

use tracing::{debug, info, warn};

use healthdesk_contracts::{
    date::DateKey,
    error::{HealthDeskError, HealthDeskResult},
    metrics::{DailyMetrics, MetricField, MetricsHistory, SeriesPoint},
};

use crate::traits::KeyValueStore;

/// Storage key the history is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "healthData";

/// Day-indexed health metrics with persisted history and derived views.
pub struct HealthMetricsStore {
    storage: Box<dyn KeyValueStore>,
    storage_key: String,
    history: MetricsHistory,
    selected_date: DateKey,
}

impl HealthMetricsStore {
    /// Load the history stored under `storage_key` and select `today`.
    ///
    /// A missing key, a failed read, or a value that does not deserialize all
    /// produce an empty history. None of these are returned as errors.
    pub fn load(
        storage: Box<dyn KeyValueStore>,
        storage_key: impl Into<String>,
        today: DateKey,
    ) -> Self {
        let storage_key = storage_key.into();
        let history = read_history(storage.as_ref(), &storage_key);

        debug!(
            storage_key = %storage_key,
            entries = history.len(),
            selected_date = %today,
            "metrics history loaded"
        );

        Self {
            storage,
            storage_key,
            history,
            selected_date: today,
        }
    }

    /// The stored record for `date`, or the default record if none exists.
    pub fn record(&self, date: DateKey) -> DailyMetrics {
        self.history.get(&date).copied().unwrap_or_default()
    }

    /// Parse `raw_value` into `field` of `date`'s record and persist.
    ///
    /// The edit is applied on top of the existing record for `date`, or on
    /// top of the default record when the date has no entry yet. An unparsable
    /// value returns `InvalidFieldValue` and leaves the history unchanged.
    ///
    /// If the write to storage fails, the in-memory edit is kept and the
    /// storage error is returned.
    pub fn set_field(
        &mut self,
        date: DateKey,
        field: MetricField,
        raw_value: &str,
    ) -> HealthDeskResult<DailyMetrics> {
        let updated = self.record(date).with_field(field, raw_value)?;
        self.history.insert(date, updated);

        debug!(
            date = %date,
            field = %field,
            value = raw_value,
            "metric field updated"
        );

        self.persist()?;
        Ok(updated)
    }

    /// Change the selected date. Any date is accepted, including future ones.
    pub fn select_date(&mut self, date: DateKey) {
        self.selected_date = date;
    }

    pub fn selected_date(&self) -> DateKey {
        self.selected_date
    }

    /// All stored entries, ordered by date.
    pub fn history(&self) -> &MetricsHistory {
        &self.history
    }

    /// `[Yesterday, Today]` values of `field` around the selected date.
    ///
    /// Yesterday is the calendar day before the selected date, not the
    /// previous stored entry. Both days resolve through `record`, so missing
    /// days read as defaults.
    pub fn comparison_series(&self, field: MetricField) -> Vec<SeriesPoint> {
        let today = self.record(self.selected_date);
        let yesterday = self
            .selected_date
            .previous()
            .map(|date| self.record(date))
            .unwrap_or_default();

        vec![
            SeriesPoint::new("Yesterday", yesterday.value(field)),
            SeriesPoint::new("Today", today.value(field)),
        ]
    }

    /// One point per metric for `date`, in display order.
    pub fn summary(&self, date: DateKey) -> Vec<SeriesPoint> {
        let record = self.record(date);
        MetricField::ALL
            .into_iter()
            .map(|field| SeriesPoint::new(field.label(), record.value(field)))
            .collect()
    }

    /// The exact payload written to storage.
    pub fn export_json(&self) -> HealthDeskResult<String> {
        serde_json::to_string(&self.history).map_err(|e| HealthDeskError::SerializationFailed {
            reason: e.to_string(),
        })
    }

    fn persist(&self) -> HealthDeskResult<()> {
        let payload = self.export_json()?;
        if let Err(e) = self.storage.set(&self.storage_key, &payload) {
            warn!(
                storage_key = %self.storage_key,
                error = %e,
                "failed to persist metrics history; in-memory edit kept"
            );
            return Err(e);
        }

        info!(
            storage_key = %self.storage_key,
            entries = self.history.len(),
            bytes = payload.len(),
            "metrics history persisted"
        );
        Ok(())
    }
}

fn read_history(storage: &dyn KeyValueStore, key: &str) -> MetricsHistory {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return MetricsHistory::new(),
        Err(e) => {
            warn!(storage_key = %key, error = %e, "failed to read metrics history; starting empty");
            return MetricsHistory::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(history) => history,
        Err(e) => {
            warn!(
                storage_key = %key,
                error = %e,
                "persisted metrics history is malformed; starting empty"
            );
            MetricsHistory::new()
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
