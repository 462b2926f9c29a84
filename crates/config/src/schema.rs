//! YAML document types.
//!
//! All fields default when absent so that a missing required field is
//! reported by [`validate`](crate::validate) with a precise message
//! instead of failing deserialization.

use serde::{Deserialize, Serialize};

/// The entire application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    /// Directory all output files are written under.
    #[serde(default)]
    pub data_dir: String,
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
}

/// Maps API settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub key: String,
}

/// A single monitored route: origin, destination, and when to sample it.
///
/// Immutable once validated; reload replaces the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Unique identifier across the document.
    #[serde(default)]
    pub id: String,
    /// Human-readable display name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    /// Append-only CSV file, relative to `data_dir`. Unique across the
    /// document.
    #[serde(default)]
    pub output_file: String,
    #[serde(default)]
    pub schedules: Vec<ScheduleWindow>,
}

/// A named time-of-day window with a weekday set and sampling interval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    #[serde(default)]
    pub name: String,
    /// Weekday names, full or abbreviated, case-insensitive.
    #[serde(default)]
    pub days: Vec<String>,
    /// `HH:MM`, inclusive lower bound of the window.
    #[serde(default)]
    pub start_time: String,
    /// `HH:MM`, inclusive upper bound; must be strictly after `start_time`.
    #[serde(default)]
    pub end_time: String,
    /// Minutes between samples inside the window, 1..=1440.
    #[serde(default)]
    pub interval_minutes: i64,
}
