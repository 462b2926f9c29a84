//! Config-to-trigger compilation.

use std::sync::Arc;

use chrono::Weekday;

use pendler_config::{parse_hhmm, resolve_weekday, Config, Itinerary, ScheduleWindow};

use crate::cron::render;
use crate::error::ScheduleError;
use crate::slots::expand;

/// One registered job's worth of schedule: a rendered cron expression,
/// a diagnostic name, and the itinerary whose route it samples.
#[derive(Debug, Clone)]
pub struct CompiledTrigger {
    /// `{itinerary}-{schedule}-{HH:MM}`, for logs only.
    pub name: String,
    /// Five-field cron expression.
    pub expression: String,
    /// The itinerary this trigger samples.
    pub itinerary: Arc<Itinerary>,
}

/// Compile a validated config into the full flat set of triggers, one per
/// (itinerary, schedule window, instant) combination.
///
/// The input must have passed [`pendler_config::validate`]; parse
/// failures or empty window expansions here are violated invariants, not
/// user errors.
pub fn compile(config: &Config) -> Result<Vec<CompiledTrigger>, ScheduleError> {
    let mut triggers = Vec::new();
    for itinerary in &config.itineraries {
        let itinerary = Arc::new(itinerary.clone());
        for schedule in &itinerary.schedules {
            compile_window(&itinerary, schedule, &mut triggers)?;
        }
    }
    Ok(triggers)
}

fn compile_window(
    itinerary: &Arc<Itinerary>,
    schedule: &ScheduleWindow,
    triggers: &mut Vec<CompiledTrigger>,
) -> Result<(), ScheduleError> {
    let invariant = |what: &str| {
        ScheduleError::Internal(format!(
            "itinerary {}, schedule {}: {what}",
            itinerary.id, schedule.name
        ))
    };

    let (start_hour, start_min) =
        parse_hhmm(&schedule.start_time).map_err(|e| invariant(&format!("bad start_time: {e}")))?;
    let (end_hour, end_min) =
        parse_hhmm(&schedule.end_time).map_err(|e| invariant(&format!("bad end_time: {e}")))?;

    let weekdays = schedule
        .days
        .iter()
        .map(|day| resolve_weekday(day))
        .collect::<Result<Vec<Weekday>, _>>()
        .map_err(|bad| invariant(&format!("bad day name: {bad}")))?;

    if schedule.interval_minutes <= 0 {
        return Err(invariant("non-positive interval"));
    }
    let instants = expand(
        start_hour,
        start_min,
        end_hour,
        end_min,
        schedule.interval_minutes as u32,
    );
    if instants.is_empty() {
        return Err(invariant("window expanded to no instants"));
    }

    for instant in instants {
        triggers.push(CompiledTrigger {
            name: format!("{}-{}-{instant}", itinerary.id, schedule.name),
            expression: render(instant, &weekdays),
            itinerary: Arc::clone(itinerary),
        });
    }
    Ok(())
}
