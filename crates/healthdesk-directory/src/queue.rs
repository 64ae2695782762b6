//! Appointment queue wait estimates.

/// Minutes until `your_number` is called, given the number now being served.
///
/// Never negative: a ticket already called (or being served) waits zero.
pub fn estimate_wait_minutes(current_number: u32, your_number: u32, avg_minutes_per_patient: u32) -> u32 {
    your_number
        .saturating_sub(current_number)
        .saturating_mul(avg_minutes_per_patient)
}

/// Render a wait time such as `"45 minutes"`, `"1 hour"`, or `"2 hours 5 minutes"`.
pub fn format_wait(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} minutes", minutes);
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    let hour_unit = if hours > 1 { "hours" } else { "hour" };

    if remaining > 0 {
        format!("{} {} {} minutes", hours, hour_unit, remaining)
    } else {
        format!("{} {}", hours, hour_unit)
    }
}
