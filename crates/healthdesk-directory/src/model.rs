//! Hospital and health-record types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use healthdesk_contracts::error::HealthDeskError;

/// Directory category of a hospital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HospitalCategory {
    General,
    Teaching,
    #[serde(rename = "Acute Care")]
    AcuteCare,
    #[serde(rename = "Long-term Care")]
    LongTermCare,
    Community,
    Research,
    #[serde(rename = "Trauma Care")]
    TraumaCare,
}

impl HospitalCategory {
    pub const ALL: [HospitalCategory; 7] = [
        Self::General,
        Self::Teaching,
        Self::AcuteCare,
        Self::LongTermCare,
        Self::Community,
        Self::Research,
        Self::TraumaCare,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Teaching => "Teaching",
            Self::AcuteCare => "Acute Care",
            Self::LongTermCare => "Long-term Care",
            Self::Community => "Community",
            Self::Research => "Research",
            Self::TraumaCare => "Trauma Care",
        }
    }
}

impl fmt::Display for HospitalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HospitalCategory {
    type Err = HealthDeskError;

    /// Case-insensitive match on the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| HealthDeskError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A hospital listed in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub category: HospitalCategory,
    pub address: String,
    pub location: GeoPoint,
    /// Registration fee in whole currency units.
    pub registration_fee: u32,
    pub doctor_availability: String,
    pub contact_number: String,
}

/// A past consultation in the patient's health record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: String,
    pub date: NaiveDate,
    pub patient_name: String,
    pub symptoms: Vec<String>,
    pub diagnosis: String,
    pub medicines: Vec<String>,
    pub doctor_name: String,
    pub hospital_name: String,
    pub digital_signature: String,
}
