//! # healthdesk-directory
//!
//! The portal's hospital directory and health-record listings.
//!
//! - [`mock_data`]: hardcoded, fictional hospitals and records
//! - [`search`]: case-insensitive listing filters
//! - [`queue`]: appointment queue wait estimates
//! - [`triage`]: canned assistant replies and a fixed symptom check
//!
//! No external systems are contacted.

pub mod mock_data;
pub mod model;
pub mod queue;
pub mod search;
pub mod triage;

pub use mock_data::{mock_health_records, mock_hospitals};
pub use model::{GeoPoint, HealthRecord, Hospital, HospitalCategory};
pub use queue::{estimate_wait_minutes, format_wait};
pub use search::{search_records, HospitalFilter};
pub use triage::{assistant_reply, diagnose, BodySystem, DiagnosticResult, Severity};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use healthdesk_contracts::error::HealthDeskError;

    use super::*;

    fn names(hospitals: &[&Hospital]) -> Vec<String> {
        hospitals.iter().map(|h| h.name.clone()).collect()
    }

    // ── Hospital filter ───────────────────────────────────────────────────────

    #[test]
    fn test_empty_filter_returns_all_hospitals() {
        let hospitals = mock_hospitals();
        let matched = HospitalFilter::default().apply(&hospitals);
        assert_eq!(matched.len(), 6);
    }

    #[test]
    fn test_term_matches_name_case_insensitively() {
        let hospitals = mock_hospitals();
        let matched = HospitalFilter::new("UNIVERSITY", None).apply(&hospitals);
        assert_eq!(names(&matched), vec!["University Medical Center"]);
    }

    #[test]
    fn test_term_matches_address() {
        let hospitals = mock_hospitals();
        let matched = HospitalFilter::new("recovery ridge", None).apply(&hospitals);
        assert_eq!(names(&matched), vec!["Rehabilitation & Recovery Center"]);
    }

    #[test]
    fn test_category_filter_alone() {
        let hospitals = mock_hospitals();
        let matched = HospitalFilter::new("", Some(HospitalCategory::Community)).apply(&hospitals);
        assert_eq!(names(&matched), vec!["Community Health Center"]);

        let none = HospitalFilter::new("", Some(HospitalCategory::TraumaCare)).apply(&hospitals);
        assert!(none.is_empty(), "no mock hospital is a trauma center");
    }

    #[test]
    fn test_term_and_category_must_both_match() {
        let hospitals = mock_hospitals();
        // "Hospital" appears in two names, but only one is General.
        let matched =
            HospitalFilter::new("hospital", Some(HospitalCategory::General)).apply(&hospitals);
        assert_eq!(names(&matched), vec!["City General Hospital"]);
    }

    #[test]
    fn test_category_parses_labels() {
        assert_eq!(
            "long-term care".parse::<HospitalCategory>().unwrap(),
            HospitalCategory::LongTermCare
        );
        let err = "Veterinary".parse::<HospitalCategory>().unwrap_err();
        assert!(matches!(err, HealthDeskError::UnknownCategory { .. }));
    }

    #[test]
    fn test_hospital_serializes_category_label() {
        let json = serde_json::to_value(&mock_hospitals()[2]).unwrap();
        assert_eq!(json["category"], "Acute Care");
        assert_eq!(json["registrationFee"], 120);
    }

    // ── Record search ─────────────────────────────────────────────────────────

    #[test]
    fn test_record_search_empty_term_returns_all() {
        let records = mock_health_records();
        assert_eq!(search_records(&records, "").len(), 3);
    }

    #[test]
    fn test_record_search_fields() {
        let records = mock_health_records();

        let by_diagnosis = search_records(&records, "allergy");
        assert_eq!(by_diagnosis.len(), 1);
        assert_eq!(by_diagnosis[0].id, "2");

        let by_doctor = search_records(&records, "lisa");
        assert_eq!(by_doctor[0].id, "3");

        let by_hospital = search_records(&records, "city general");
        assert_eq!(by_hospital[0].id, "1");

        let by_symptom = search_records(&records, "NAUSEA");
        assert_eq!(by_symptom[0].id, "3");
    }

    #[test]
    fn test_record_search_does_not_match_medicines() {
        let records = mock_health_records();
        assert!(search_records(&records, "paracetamol").is_empty());
    }

    // ── Queue ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_estimate_wait_is_never_negative() {
        assert_eq!(estimate_wait_minutes(10, 14, 15), 60);
        assert_eq!(estimate_wait_minutes(14, 14, 15), 0);
        assert_eq!(estimate_wait_minutes(20, 14, 15), 0);
    }

    #[test]
    fn test_format_wait_boundaries() {
        assert_eq!(format_wait(0), "0 minutes");
        assert_eq!(format_wait(59), "59 minutes");
        assert_eq!(format_wait(60), "1 hour");
        assert_eq!(format_wait(61), "1 hour 1 minutes");
        assert_eq!(format_wait(120), "2 hours");
        assert_eq!(format_wait(125), "2 hours 5 minutes");
    }

    // ── Triage ────────────────────────────────────────────────────────────────

    #[test]
    fn test_assistant_reply_matches_topic_case_insensitively() {
        let reply = assistant_reply("I've had a FEVER since Monday");
        assert!(reply.starts_with("Fever can be concerning"), "got: {reply}");
    }

    /// Keywords are checked in a fixed order, not by position in the message.
    #[test]
    fn test_assistant_reply_keyword_priority() {
        let reply = assistant_reply("emergency: chest pain and fever");
        assert!(reply.contains("experiencing pain"), "pain outranks fever and emergency");

        let reply = assistant_reply("prevention tips for an emergency");
        assert!(reply.starts_with("Prevention is the best medicine"));

        let reply = assistant_reply("what symptoms should raise awareness?");
        assert!(reply.starts_with("Understanding symptoms"));
    }

    #[test]
    fn test_assistant_reply_falls_back_to_generic_answer() {
        let reply = assistant_reply("How much water should I drink?");
        assert!(reply.starts_with("Thank you for your question: \"How much water should I drink?\""));
        assert!(reply.contains("consult with a healthcare professional"));
    }

    #[test]
    fn test_diagnose_returns_fixed_respiratory_result() {
        let result = diagnose("runny nose and sore throat").unwrap();
        assert_eq!(result.possible_diagnosis, "Common Cold");
        assert_eq!(result.body_system, BodySystem::Respiratory);
        assert_eq!(result.severity, Severity::Low);
        assert_eq!(result.reasons.len(), 3);
        assert_eq!(result.precautions.len(), 4);
        assert_eq!(result.remedies.len(), 4);
        assert!(result.recommended_specialist.is_none());
    }

    #[test]
    fn test_diagnose_rejects_blank_symptoms() {
        for blank in ["", "   ", "\n\t"] {
            let err = diagnose(blank).unwrap_err();
            assert!(
                matches!(err, HealthDeskError::EmptyInput { .. }),
                "expected EmptyInput for {blank:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_diagnostic_result_wire_format() {
        let json = serde_json::to_value(diagnose("cough").unwrap()).unwrap();
        assert_eq!(json["possibleDiagnosis"], "Common Cold");
        assert_eq!(json["bodySystem"], "Respiratory");
        assert_eq!(json["severity"], "low");
        assert!(json.get("recommendedSpecialist").is_none());
    }
}
