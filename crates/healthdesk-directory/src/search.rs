//! Case-insensitive search over hospitals and health records.

use tracing::debug;

use crate::model::{HealthRecord, Hospital, HospitalCategory};

/// Hospital listing filter: free-text term plus an optional category.
///
/// A hospital matches when the term is empty or appears in its name or
/// address (case-insensitive), and the category is unset or equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HospitalFilter {
    pub term: String,
    pub category: Option<HospitalCategory>,
}

impl HospitalFilter {
    pub fn new(term: impl Into<String>, category: Option<HospitalCategory>) -> Self {
        Self {
            term: term.into(),
            category,
        }
    }

    pub fn matches(&self, hospital: &Hospital) -> bool {
        let needle = self.term.to_lowercase();
        let term_matches = needle.is_empty()
            || hospital.name.to_lowercase().contains(&needle)
            || hospital.address.to_lowercase().contains(&needle);
        let category_matches = self.category.map_or(true, |c| c == hospital.category);
        term_matches && category_matches
    }

    /// The hospitals that match, in their original order.
    pub fn apply<'a>(&self, hospitals: &'a [Hospital]) -> Vec<&'a Hospital> {
        let matched: Vec<&Hospital> = hospitals.iter().filter(|h| self.matches(h)).collect();
        debug!(
            term = %self.term,
            category = ?self.category,
            matched = matched.len(),
            total = hospitals.len(),
            "hospital filter applied"
        );
        matched
    }
}

/// Records whose diagnosis, doctor, hospital, or any symptom contains `term`.
///
/// Matching is case-insensitive; an empty term returns every record.
pub fn search_records<'a>(records: &'a [HealthRecord], term: &str) -> Vec<&'a HealthRecord> {
    let needle = term.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    let matched: Vec<&HealthRecord> = records
        .iter()
        .filter(|r| {
            contains(&r.diagnosis)
                || contains(&r.doctor_name)
                || contains(&r.hospital_name)
                || r.symptoms.iter().any(|s| contains(s))
        })
        .collect();

    debug!(term = %term, matched = matched.len(), total = records.len(), "record search applied");
    matched
}
