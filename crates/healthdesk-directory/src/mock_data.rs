//! Simulated directory data.
//!
//! All hospitals and records in this module are hardcoded and fictional.
//! They stand in for a hospital registry and an EHR service that the portal
//! does not have.

use chrono::NaiveDate;

use crate::model::{GeoPoint, HealthRecord, Hospital, HospitalCategory};

// ── Hospitals (mock) ──────────────────────────────────────────────────────────

/// The six hospitals shown in the directory.
pub fn mock_hospitals() -> Vec<Hospital> {
    vec![
        hospital(
            "1",
            "City General Hospital",
            HospitalCategory::General,
            "123 Healthcare Blvd, Medical District, CA 94103",
            (37.7749, -122.4194),
            75,
            "Mon-Fri: 8:00 AM - 8:00 PM",
            "(555) 123-4567",
        ),
        hospital(
            "2",
            "University Medical Center",
            HospitalCategory::Teaching,
            "456 Education Lane, Academic Heights, CA 94110",
            (37.7549, -122.4094),
            90,
            "Mon-Sun: 24 hours",
            "(555) 234-5678",
        ),
        hospital(
            "3",
            "Emergency Care Hospital",
            HospitalCategory::AcuteCare,
            "789 Urgent St, Critical Junction, CA 94107",
            (37.7649, -122.3994),
            120,
            "Mon-Sun: 24 hours",
            "(555) 345-6789",
        ),
        hospital(
            "4",
            "Community Health Center",
            HospitalCategory::Community,
            "101 Wellness Way, Neighborly Hills, CA 94112",
            (37.7349, -122.4294),
            40,
            "Mon-Sat: 9:00 AM - 5:00 PM",
            "(555) 456-7890",
        ),
        hospital(
            "5",
            "Research Medical Institute",
            HospitalCategory::Research,
            "202 Discovery Drive, Innovation Park, CA 94105",
            (37.7849, -122.3894),
            85,
            "Mon-Fri: 8:00 AM - 6:00 PM",
            "(555) 567-8901",
        ),
        hospital(
            "6",
            "Rehabilitation & Recovery Center",
            HospitalCategory::LongTermCare,
            "303 Healing Path, Recovery Ridge, CA 94115",
            (37.7949, -122.4294),
            65,
            "Mon-Sun: 7:00 AM - 9:00 PM",
            "(555) 678-9012",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn hospital(
    id: &str,
    name: &str,
    category: HospitalCategory,
    address: &str,
    (lat, lng): (f64, f64),
    registration_fee: u32,
    doctor_availability: &str,
    contact_number: &str,
) -> Hospital {
    Hospital {
        id: id.to_string(),
        name: name.to_string(),
        category,
        address: address.to_string(),
        location: GeoPoint { lat, lng },
        registration_fee,
        doctor_availability: doctor_availability.to_string(),
        contact_number: contact_number.to_string(),
    }
}

// ── Health records (mock) ─────────────────────────────────────────────────────

/// Three past consultations for a fictional family.
pub fn mock_health_records() -> Vec<HealthRecord> {
    vec![
        HealthRecord {
            id: "1".to_string(),
            date: ymd(2023, 3, 15),
            patient_name: "John Doe".to_string(),
            symptoms: strings(&["Fever", "Sore throat", "Cough"]),
            diagnosis: "Common Cold".to_string(),
            medicines: strings(&["Paracetamol", "Cough syrup", "Vitamin C"]),
            doctor_name: "Sarah Johnson".to_string(),
            hospital_name: "City General Hospital".to_string(),
            digital_signature: "dr_sarah_johnson_123".to_string(),
        },
        HealthRecord {
            id: "2".to_string(),
            date: ymd(2023, 2, 8),
            patient_name: "John Doe".to_string(),
            symptoms: strings(&["Headache", "Fatigue", "Runny nose"]),
            diagnosis: "Seasonal Allergy".to_string(),
            medicines: strings(&["Cetirizine", "Nasal spray"]),
            doctor_name: "Mike Wilson".to_string(),
            hospital_name: "MedCare Clinic".to_string(),
            digital_signature: "dr_mike_wilson_456".to_string(),
        },
        HealthRecord {
            id: "3".to_string(),
            date: ymd(2023, 1, 22),
            patient_name: "Emily Doe".to_string(),
            symptoms: strings(&["Stomachache", "Nausea"]),
            diagnosis: "Gastroenteritis".to_string(),
            medicines: strings(&["Omeprazole", "Probiotics"]),
            doctor_name: "Lisa Chen".to_string(),
            hospital_name: "Community Health Center".to_string(),
            digital_signature: "dr_lisa_chen_789".to_string(),
        },
    ]
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("mock record dates are valid")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
