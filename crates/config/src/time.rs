//! Strict `HH:MM` parsing and weekday-name resolution.

use chrono::Weekday;

use crate::error::TimeParseError;

/// Parse a time-of-day string into `(hour, minute)`.
///
/// The format is strict: one or two digits for the hour, exactly two for
/// the minute. `"6:30"` and `"06:30"` both parse; `"9:5"` does not.
pub fn parse_hhmm(s: &str) -> Result<(u8, u8), TimeParseError> {
    let malformed = || TimeParseError::Format(s.to_string());

    let (hour_part, minute_part) = s.split_once(':').ok_or_else(malformed)?;
    if hour_part.is_empty()
        || hour_part.len() > 2
        || minute_part.len() != 2
        || !hour_part.bytes().all(|b| b.is_ascii_digit())
        || !minute_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    let hour: u32 = hour_part.parse().map_err(|_| malformed())?;
    let minute: u32 = minute_part.parse().map_err(|_| malformed())?;

    if hour > 23 {
        return Err(TimeParseError::HourRange(hour));
    }
    if minute > 59 {
        return Err(TimeParseError::MinuteRange(minute));
    }

    Ok((hour as u8, minute as u8))
}

/// Resolve a weekday name to a [`Weekday`].
///
/// Case-insensitive; accepts full names and common abbreviations.
/// Returns the rejected input on failure so callers can name it.
pub fn resolve_weekday(day: &str) -> Result<Weekday, String> {
    match day.to_ascii_lowercase().as_str() {
        "sunday" | "sun" => Ok(Weekday::Sun),
        "monday" | "mon" => Ok(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Ok(Weekday::Tue),
        "wednesday" | "wed" => Ok(Weekday::Wed),
        "thursday" | "thu" | "thurs" => Ok(Weekday::Thu),
        "friday" | "fri" => Ok(Weekday::Fri),
        "saturday" | "sat" => Ok(Weekday::Sat),
        _ => Err(day.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hhmm_accepts_valid_times() {
        assert_eq!(parse_hhmm("06:00"), Ok((6, 0)));
        assert_eq!(parse_hhmm("6:00"), Ok((6, 0)));
        assert_eq!(parse_hhmm("23:59"), Ok((23, 59)));
        assert_eq!(parse_hhmm("0:05"), Ok((0, 5)));
    }

    #[test]
    fn parse_hhmm_rejects_out_of_range() {
        assert_eq!(parse_hhmm("25:00"), Err(TimeParseError::HourRange(25)));
        assert_eq!(parse_hhmm("12:60"), Err(TimeParseError::MinuteRange(60)));
    }

    #[test]
    fn parse_hhmm_rejects_malformed() {
        for input in ["9:5", "nine:five", "0900", "09:00:00", ":30", "09:", "", "123:00"] {
            assert_eq!(
                parse_hhmm(input),
                Err(TimeParseError::Format(input.to_string())),
                "input {input:?} should be malformed"
            );
        }
    }

    #[test]
    fn resolve_weekday_full_and_abbreviated() {
        assert_eq!(resolve_weekday("sunday"), Ok(Weekday::Sun));
        assert_eq!(resolve_weekday("sun"), Ok(Weekday::Sun));
        assert_eq!(resolve_weekday("monday"), Ok(Weekday::Mon));
        assert_eq!(resolve_weekday("mon"), Ok(Weekday::Mon));
        assert_eq!(resolve_weekday("tues"), Ok(Weekday::Tue));
        assert_eq!(resolve_weekday("wed"), Ok(Weekday::Wed));
        assert_eq!(resolve_weekday("thurs"), Ok(Weekday::Thu));
        assert_eq!(resolve_weekday("fri"), Ok(Weekday::Fri));
        assert_eq!(resolve_weekday("sat"), Ok(Weekday::Sat));
    }

    #[test]
    fn resolve_weekday_is_case_insensitive() {
        assert_eq!(resolve_weekday("Mon"), Ok(Weekday::Mon));
        assert_eq!(resolve_weekday("MON"), Ok(Weekday::Mon));
        assert_eq!(resolve_weekday("monday"), Ok(Weekday::Mon));
        assert_eq!(resolve_weekday("SaTuRdAy"), Ok(Weekday::Sat));
    }

    #[test]
    fn resolve_weekday_rejects_unknown() {
        assert_eq!(resolve_weekday("funday"), Err("funday".to_string()));
        assert_eq!(resolve_weekday(""), Err(String::new()));
    }
}
