//! Cron expression synthesis.

use chrono::Weekday;

use crate::slots::TriggerInstant;

/// Render a trigger instant and weekday set as a standard five-field cron
/// expression: `minute hour * * days`.
///
/// Days are cron weekday numbers (0=Sunday..6=Saturday), joined with
/// commas in the order supplied. Duplicates are passed through; the
/// engine treats a repeated day-field entry as a no-op.
pub(crate) fn render(instant: TriggerInstant, weekdays: &[Weekday]) -> String {
    let days = weekdays
        .iter()
        .map(|day| day.num_days_from_sunday().to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{} {} * * {}", instant.minute, instant.hour, days)
}

/// Normalize a 5-field cron expression to the engine's 6-field syntax by
/// prepending a seconds field.
pub(crate) fn normalize(cron_5field: &str) -> String {
    let trimmed = cron_5field.trim();
    if trimmed.split_whitespace().count() == 5 {
        format!("0 {trimmed}")
    } else {
        trimmed.to_string()
    }
}
