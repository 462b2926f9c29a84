//! Sample record formatting.

use chrono::{DateTime, Local, SecondsFormat};

/// Render one sample as a CSV line: RFC 3339 timestamp, duration in
/// minutes with six decimal places, trailing newline. Appended as-is;
/// no header, no rotation.
pub fn sample_line(timestamp: DateTime<Local>, minutes: f64) -> String {
    format!(
        "{},{:.6}\n",
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        minutes
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn formats_timestamp_and_minutes() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 4, 6, 15, 0).unwrap();
        let line = sample_line(timestamp, 23.5);
        let (ts, rest) = line.split_once(',').unwrap();
        assert_eq!(ts, timestamp.to_rfc3339_opts(SecondsFormat::Secs, true));
        assert_eq!(rest, "23.500000\n");
    }

    #[test]
    fn one_line_per_sample() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 4, 6, 15, 0).unwrap();
        let line = sample_line(timestamp, 17.25);
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
        assert_eq!(line.matches(',').count(), 1);
    }
}
