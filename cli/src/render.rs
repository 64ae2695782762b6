//! Terminal and JSON output for CLI results.

use serde::Serialize;

use healthdesk_contracts::{
    date::DateKey,
    error::{HealthDeskError, HealthDeskResult},
    metrics::{DailyMetrics, MetricsHistory, SeriesPoint},
};
use healthdesk_directory::{DiagnosticResult, HealthRecord, Hospital};

fn print_json<T: Serialize + ?Sized>(value: &T) -> HealthDeskResult<()> {
    let out = serde_json::to_string_pretty(value).map_err(|e| HealthDeskError::SerializationFailed {
        reason: e.to_string(),
    })?;
    println!("{}", out);
    Ok(())
}

pub fn record(date: DateKey, metrics: &DailyMetrics, json: bool) -> HealthDeskResult<()> {
    if json {
        return print_json(&serde_json::json!({ "date": date, "metrics": metrics }));
    }

    println!("Metrics for {}", date);
    println!("  Steps:         {}", metrics.steps);
    println!("  Calories:      {}", metrics.calories);
    println!("  Water:         {} glasses", metrics.water_glasses);
    println!("  Sleep:         {} hrs", metrics.sleep_hours);
    println!("  Heart Rate:    {} bpm", metrics.heart_rate_bpm);
    println!(
        "  Mental Health: {} ({})",
        metrics.mental_state,
        metrics.mental_state.score()
    );
    Ok(())
}

pub fn series(title: &str, points: &[SeriesPoint], json: bool) -> HealthDeskResult<()> {
    if json {
        return print_json(points);
    }

    println!("{}", title);
    let width = points.iter().map(|p| p.label.len()).max().unwrap_or(0);
    for point in points {
        println!("  {:<width$}  {}", point.label, point.value, width = width);
    }
    Ok(())
}

pub fn history(history: &MetricsHistory, json: bool) -> HealthDeskResult<()> {
    if json {
        return print_json(history);
    }

    if history.is_empty() {
        println!("No metrics recorded yet.");
        return Ok(());
    }

    println!(
        "{:<10}  {:>7}  {:>8}  {:>5}  {:>5}  {:>5}  {}",
        "date", "steps", "calories", "water", "sleep", "bpm", "mental"
    );
    for (date, m) in history {
        println!(
            "{:<10}  {:>7}  {:>8}  {:>5}  {:>5}  {:>5}  {}",
            date.to_string(),
            m.steps,
            m.calories,
            m.water_glasses,
            m.sleep_hours,
            m.heart_rate_bpm,
            m.mental_state
        );
    }
    Ok(())
}

pub fn hospitals(hospitals: &[&Hospital], json: bool) -> HealthDeskResult<()> {
    if json {
        return print_json(hospitals);
    }

    if hospitals.is_empty() {
        println!("No hospitals match your search. Try a different term or category.");
        return Ok(());
    }

    for h in hospitals {
        println!("{} [{}]", h.name, h.category);
        println!("  {}", h.address);
        println!(
            "  Fee: {}  |  {}  |  {}",
            h.registration_fee, h.doctor_availability, h.contact_number
        );
    }
    Ok(())
}

pub fn records(records: &[&HealthRecord], json: bool) -> HealthDeskResult<()> {
    if json {
        return print_json(records);
    }

    if records.is_empty() {
        println!("No records match your search. Try different keywords.");
        return Ok(());
    }

    for r in records {
        println!("{}  {}  ({})", r.date, r.diagnosis, r.patient_name);
        println!("  Dr. {} at {}", r.doctor_name, r.hospital_name);
        println!("  Symptoms:  {}", r.symptoms.join(", "));
        println!("  Medicines: {}", r.medicines.join(", "));
    }
    Ok(())
}

pub fn wait(minutes: u32, formatted: &str, json: bool) -> HealthDeskResult<()> {
    if json {
        return print_json(&serde_json::json!({ "minutes": minutes, "formatted": formatted }));
    }
    println!("Estimated wait: {}", formatted);
    Ok(())
}

pub fn reply(message: &str, reply: &str, json: bool) -> HealthDeskResult<()> {
    if json {
        return print_json(&serde_json::json!({ "message": message, "reply": reply }));
    }
    println!("{}", reply);
    Ok(())
}

pub fn diagnosis(result: &DiagnosticResult, json: bool) -> HealthDeskResult<()> {
    if json {
        return print_json(result);
    }

    println!("Possible diagnosis: {}", result.possible_diagnosis);
    println!("  Body system: {:?}  |  Severity: {:?}", result.body_system, result.severity);
    if let Some(specialist) = &result.recommended_specialist {
        println!("  Recommended specialist: {}", specialist);
    }
    for (heading, items) in [
        ("Reasons", &result.reasons),
        ("Precautions", &result.precautions),
        ("Remedies", &result.remedies),
    ] {
        println!("{}:", heading);
        for item in items {
            println!("  - {}", item);
        }
    }
    println!("This is a demo result, not medical advice. Consult a healthcare professional.");
    Ok(())
}
