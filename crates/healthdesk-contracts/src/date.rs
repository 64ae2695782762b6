//! Calendar date keys.
//!
//! Every metrics entry is identified by a single calendar date. `DateKey`
//! wraps a `chrono::NaiveDate` and always renders as ISO `YYYY-MM-DD`, which
//! is also its serialized form (a JSON object key in the persisted history).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{HealthDeskError, HealthDeskResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// An ISO calendar date used as the identity of a `DailyMetrics` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Wrap an existing `NaiveDate`.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a key from year, month, and day.
    ///
    /// Returns `InvalidDateKey` when the triple is not a real calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> HealthDeskResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| HealthDeskError::InvalidDateKey {
                value: format!("{:04}-{:02}-{:02}", year, month, day),
                reason: "not a calendar date".to_string(),
            })
    }

    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> HealthDeskResult<Self> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|e| HealthDeskError::InvalidDateKey {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// The calendar day before this one, or `None` at the start of the
    /// representable range.
    pub fn previous(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// The underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for DateKey {
    type Err = HealthDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
