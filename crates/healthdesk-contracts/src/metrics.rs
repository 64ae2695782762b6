//! Daily health metrics and their derived series types.
//!
//! `DailyMetrics` is the persisted per-day record. Its serde field names are
//! the storage wire names (`water`, `sleep`, `heartRate`, `mentalHealth`), so
//! the JSON payload written by the store is the externally visible format.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::DateKey;
use crate::error::{HealthDeskError, HealthDeskResult};

/// Day-indexed metrics history. Only dates that were edited are present.
pub type MetricsHistory = BTreeMap<DateKey, DailyMetrics>;

// ── MentalState ──────────────────────────────────────────────────────────────

/// Self-reported wellbeing, ordered `Stressed < Calm < Thriving`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MentalState {
    Stressed,
    Calm,
    Thriving,
}

impl MentalState {
    /// All states in ascending order.
    pub const ALL: [MentalState; 3] = [Self::Stressed, Self::Calm, Self::Thriving];

    /// Numeric order used for charting: Stressed=1, Calm=2, Thriving=3.
    pub fn score(&self) -> u8 {
        match self {
            Self::Stressed => 1,
            Self::Calm => 2,
            Self::Thriving => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stressed => "Stressed",
            Self::Calm => "Calm",
            Self::Thriving => "Thriving",
        }
    }
}

impl fmt::Display for MentalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MentalState {
    type Err = HealthDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| HealthDeskError::InvalidFieldValue {
                field: MetricField::MentalHealth.wire_name().to_string(),
                value: s.to_string(),
                reason: "expected one of Stressed, Calm, Thriving".to_string(),
            })
    }
}

// ── MetricField ──────────────────────────────────────────────────────────────

/// One editable field of `DailyMetrics`, named by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricField {
    Steps,
    Calories,
    Water,
    Sleep,
    HeartRate,
    MentalHealth,
}

impl MetricField {
    /// All fields in display order.
    pub const ALL: [MetricField; 6] = [
        Self::Steps,
        Self::Calories,
        Self::Water,
        Self::Sleep,
        Self::HeartRate,
        Self::MentalHealth,
    ];

    /// The field's key in the persisted JSON object.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Calories => "calories",
            Self::Water => "water",
            Self::Sleep => "sleep",
            Self::HeartRate => "heartRate",
            Self::MentalHealth => "mentalHealth",
        }
    }

    /// Human-readable label used in derived series.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Steps => "Steps",
            Self::Calories => "Calories",
            Self::Water => "Water",
            Self::Sleep => "Sleep",
            Self::HeartRate => "Heart Rate",
            Self::MentalHealth => "Mental Health",
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for MetricField {
    type Err = HealthDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name() == s.trim())
            .ok_or_else(|| HealthDeskError::UnknownMetric {
                name: s.to_string(),
            })
    }
}

// ── DailyMetrics ─────────────────────────────────────────────────────────────

/// Metrics recorded for a single calendar day.
///
/// Numeric fields are not range-checked: negative values are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    pub steps: i64,
    pub calories: i64,
    #[serde(rename = "water")]
    pub water_glasses: i64,
    #[serde(rename = "sleep")]
    pub sleep_hours: f64,
    #[serde(rename = "heartRate")]
    pub heart_rate_bpm: i64,
    #[serde(rename = "mentalHealth")]
    pub mental_state: MentalState,
}

impl Default for DailyMetrics {
    /// The fallback record for any date with no stored entry.
    fn default() -> Self {
        Self {
            steps: 500,
            calories: 200,
            water_glasses: 4,
            sleep_hours: 7.0,
            heart_rate_bpm: 70,
            mental_state: MentalState::Calm,
        }
    }
}

impl DailyMetrics {
    /// Return a copy of `self` with `field` replaced by the parsed `raw` value.
    ///
    /// Whitespace is trimmed and an empty string reads as zero. Numeric fields
    /// accept any finite number; integer fields round fractional input to the
    /// nearest integer. Non-numeric and non-finite input is rejected.
    pub fn with_field(&self, field: MetricField, raw: &str) -> HealthDeskResult<Self> {
        let mut next = *self;
        match field {
            MetricField::Steps => next.steps = parse_integer(field, raw)?,
            MetricField::Calories => next.calories = parse_integer(field, raw)?,
            MetricField::Water => next.water_glasses = parse_integer(field, raw)?,
            MetricField::Sleep => next.sleep_hours = parse_number(field, raw)?,
            MetricField::HeartRate => next.heart_rate_bpm = parse_integer(field, raw)?,
            MetricField::MentalHealth => next.mental_state = raw.parse()?,
        }
        Ok(next)
    }

    /// Numeric projection of one field; mental state maps through its score.
    pub fn value(&self, field: MetricField) -> f64 {
        match field {
            MetricField::Steps => self.steps as f64,
            MetricField::Calories => self.calories as f64,
            MetricField::Water => self.water_glasses as f64,
            MetricField::Sleep => self.sleep_hours,
            MetricField::HeartRate => self.heart_rate_bpm as f64,
            MetricField::MentalHealth => f64::from(self.mental_state.score()),
        }
    }
}

/// Integer fields accept any finite number (`"8000.0"`, `"1e3"`); fractional
/// values round to the nearest integer, halves away from zero.
fn parse_integer(field: MetricField, raw: &str) -> HealthDeskResult<i64> {
    let rounded = parse_number(field, raw)?.round();
    // i64::MAX is not exactly representable; 2^63 is the first value past it.
    if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return Err(HealthDeskError::InvalidFieldValue {
            field: field.wire_name().to_string(),
            value: raw.to_string(),
            reason: "value is outside the integer range".to_string(),
        });
    }
    Ok(rounded as i64)
}

fn parse_number(field: MetricField, raw: &str) -> HealthDeskResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let invalid = |reason: String| HealthDeskError::InvalidFieldValue {
        field: field.wire_name().to_string(),
        value: raw.to_string(),
        reason,
    };
    let value = trimmed.parse::<f64>().map_err(|e| invalid(e.to_string()))?;
    if !value.is_finite() {
        return Err(invalid("value is not a finite number".to_string()));
    }
    Ok(value)
}

// ── SeriesPoint ──────────────────────────────────────────────────────────────

/// A labelled value in a derived chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
