//! Simulated symptom triage.
//!
//! Both functions here are canned stand-ins for an assistant and a
//! diagnostics service the portal does not have. Nothing is inferred from
//! the input beyond keyword matching; the diagnostic result is fixed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use healthdesk_contracts::error::{HealthDeskError, HealthDeskResult};

/// How urgently a diagnostic result should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// The body system a diagnostic result is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodySystem {
    Cardiovascular,
    Respiratory,
    Digestive,
    Nervous,
    Muscular,
    Skeletal,
    Integumentary,
    Endocrine,
    Lymphatic,
    Urinary,
    Reproductive,
}

/// Output of a symptom check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    pub possible_diagnosis: String,
    pub reasons: Vec<String>,
    pub precautions: Vec<String>,
    pub remedies: Vec<String>,
    pub body_system: BodySystem,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_specialist: Option<String>,
}

// ── Assistant replies (mock) ──────────────────────────────────────────────────

/// Topic keywords and their canned replies, checked in this order.
const TOPIC_REPLIES: [(&str, &str); 6] = [
    (
        "pain",
        "I understand you're experiencing pain. For pain management, consider rest, \
         proper hydration, and consult a healthcare provider for persistent issues. \
         Severe or sudden pain always warrants immediate medical attention.",
    ),
    (
        "fever",
        "Fever can be concerning. Monitor your temperature, stay hydrated, rest, and \
         contact a healthcare provider if fever exceeds 103°F (39.4°C) or persists \
         beyond 3 days.",
    ),
    (
        "symptom",
        "Understanding symptoms is key to maintaining health. Timing, intensity, and \
         accompanying signs all matter when deciding whether professional care is needed.",
    ),
    (
        "prevention",
        "Prevention is the best medicine! Key strategies include regular exercise \
         (150 mins/week), balanced nutrition rich in fruits and vegetables, adequate \
         sleep (7-9 hours), stress management, regular health screenings, good hygiene, \
         and staying up-to-date with vaccinations.",
    ),
    (
        "emergency",
        "Emergency warning signs requiring immediate medical attention include chest \
         pain, difficulty breathing, severe bleeding, loss of consciousness, severe burns, \
         signs of stroke (FAST test), severe allergic reactions, and persistent severe \
         pain. When in doubt, seek emergency care!",
    ),
    (
        "awareness",
        "Health awareness empowers you to make informed decisions. Know your family \
         medical history and your risk factors, recognize early warning signs, and keep \
         to a preventive care schedule.",
    ),
];

/// Canned assistant reply for `message`.
///
/// The first topic keyword contained in the message (case-insensitive) picks
/// the reply, in the order pain, fever, symptom, prevention, emergency,
/// awareness. A message with no keyword gets a generic reply quoting it.
pub fn assistant_reply(message: &str) -> String {
    let lowered = message.to_lowercase();
    match TOPIC_REPLIES
        .iter()
        .find(|(keyword, _)| lowered.contains(*keyword))
    {
        Some((keyword, reply)) => {
            debug!(topic = %keyword, "assistant topic matched");
            (*reply).to_string()
        }
        None => {
            debug!("no assistant topic matched; using generic reply");
            format!(
                "Thank you for your question: \"{message}\". I can discuss symptoms, \
                 prevention strategies, when to seek care, and general wellness tips. \
                 For immediate health concerns, please consult with a healthcare professional."
            )
        }
    }
}

// ── Symptom check (mock) ──────────────────────────────────────────────────────

/// Run the simulated symptom check.
///
/// Any non-blank description yields the same low-severity respiratory
/// result. Blank input returns `EmptyInput`.
pub fn diagnose(symptoms: &str) -> HealthDeskResult<DiagnosticResult> {
    if symptoms.trim().is_empty() {
        return Err(HealthDeskError::EmptyInput {
            what: "symptom description".to_string(),
        });
    }

    debug!(chars = symptoms.trim().len(), "symptom check requested");

    Ok(DiagnosticResult {
        possible_diagnosis: "Common Cold".to_string(),
        reasons: strings(&[
            "Viral infection of the upper respiratory tract",
            "Caused by rhinovirus or coronavirus",
            "Spread through airborne droplets or direct contact",
        ]),
        precautions: strings(&[
            "Rest and stay hydrated",
            "Wash hands frequently",
            "Avoid close contact with others",
            "Cover mouth and nose when coughing or sneezing",
        ]),
        remedies: strings(&[
            "Over-the-counter pain relievers for fever and discomfort",
            "Decongestants for nasal symptoms",
            "Cough suppressants for persistent cough",
            "Warm liquids and salt water gargles for sore throat",
        ]),
        body_system: BodySystem::Respiratory,
        severity: Severity::Low,
        recommended_specialist: None,
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
