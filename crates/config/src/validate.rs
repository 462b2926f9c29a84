//! Semantic validation of a parsed config document.
//!
//! Fail-fast: the first violation is returned and the whole document is
//! rejected. No side effects. Error messages identify the offending
//! itinerary by id and the schedule by name (or index, before the name is
//! known to be valid).

use std::collections::HashSet;

use crate::error::{ValidationError, WindowError};
use crate::schema::{Config, ScheduleWindow};
use crate::time::{parse_hhmm, resolve_weekday};

/// Check a config document for semantic errors before it is compiled into
/// jobs.
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    if config.api.key.is_empty() {
        return Err(ValidationError::MissingApiKey);
    }
    if config.data_dir.is_empty() {
        return Err(ValidationError::MissingDataDir);
    }
    if config.itineraries.is_empty() {
        return Err(ValidationError::NoItineraries);
    }

    let mut seen_ids = HashSet::new();
    let mut seen_files = HashSet::new();

    for (index, itinerary) in config.itineraries.iter().enumerate() {
        if itinerary.id.is_empty() {
            return Err(ValidationError::MissingId { index });
        }
        let missing = |field| ValidationError::MissingField {
            id: itinerary.id.clone(),
            field,
        };
        if itinerary.name.is_empty() {
            return Err(missing("name"));
        }
        if itinerary.from.is_empty() {
            return Err(missing("from"));
        }
        if itinerary.to.is_empty() {
            return Err(missing("to"));
        }
        if itinerary.output_file.is_empty() {
            return Err(missing("output_file"));
        }

        if !seen_ids.insert(itinerary.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: itinerary.id.clone(),
            });
        }
        if !seen_files.insert(itinerary.output_file.as_str()) {
            return Err(ValidationError::DuplicateOutputFile {
                path: itinerary.output_file.clone(),
            });
        }

        if itinerary.schedules.is_empty() {
            return Err(ValidationError::NoSchedules {
                id: itinerary.id.clone(),
            });
        }
        for (schedule_index, schedule) in itinerary.schedules.iter().enumerate() {
            validate_window(&itinerary.id, schedule_index, schedule)?;
        }
    }

    Ok(())
}

/// Check a single schedule window.
fn validate_window(
    itinerary_id: &str,
    index: usize,
    schedule: &ScheduleWindow,
) -> Result<(), ValidationError> {
    if schedule.name.is_empty() {
        return Err(ValidationError::MissingScheduleName {
            id: itinerary_id.to_string(),
            index,
        });
    }
    let window = |reason| ValidationError::Window {
        id: itinerary_id.to_string(),
        schedule: schedule.name.clone(),
        reason,
    };

    if schedule.days.is_empty() {
        return Err(window(WindowError::NoDays));
    }
    for day in &schedule.days {
        resolve_weekday(day).map_err(|bad| window(WindowError::BadDay(bad)))?;
    }

    let (start_hour, start_min) =
        parse_hhmm(&schedule.start_time).map_err(|e| window(WindowError::BadStartTime(e)))?;
    let (end_hour, end_min) =
        parse_hhmm(&schedule.end_time).map_err(|e| window(WindowError::BadEndTime(e)))?;

    // Equal or reversed is an error, not an empty-window no-op.
    let start_minutes = u32::from(start_hour) * 60 + u32::from(start_min);
    let end_minutes = u32::from(end_hour) * 60 + u32::from(end_min);
    if start_minutes >= end_minutes {
        return Err(window(WindowError::StartNotBeforeEnd));
    }

    if schedule.interval_minutes <= 0 {
        return Err(window(WindowError::IntervalNotPositive));
    }
    if schedule.interval_minutes > 1440 {
        return Err(window(WindowError::IntervalTooLarge));
    }

    Ok(())
}
