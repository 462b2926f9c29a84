//! Error types for configuration loading and validation.

/// Errors that can occur while reading and parsing the config document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Filesystem I/O error.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse/deserialization error.
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Structurally parseable but semantically invalid document.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Semantic validation error. The first violation wins; a single invalid
/// field invalidates the whole document.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("api key is required (set api.key or the {} env var)", crate::API_KEY_ENV)]
    MissingApiKey,

    #[error("data_dir is required")]
    MissingDataDir,

    #[error("at least one itinerary is required")]
    NoItineraries,

    #[error("itinerary {index}: id is required")]
    MissingId { index: usize },

    #[error("itinerary {id}: {field} is required")]
    MissingField { id: String, field: &'static str },

    #[error("duplicate itinerary id: {id}")]
    DuplicateId { id: String },

    #[error("duplicate output_file: {path} (used by multiple itineraries)")]
    DuplicateOutputFile { path: String },

    #[error("itinerary {id}: at least one schedule is required")]
    NoSchedules { id: String },

    #[error("itinerary {id}, schedule {index}: name is required")]
    MissingScheduleName { id: String, index: usize },

    /// Any problem inside a named schedule window.
    #[error("itinerary {id}, schedule {schedule}: {reason}")]
    Window {
        id: String,
        schedule: String,
        reason: WindowError,
    },
}

/// Problems with a single schedule window, reported under the window's
/// name by [`ValidationError::Window`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("at least one day is required")]
    NoDays,

    #[error("invalid day name: {0}")]
    BadDay(String),

    #[error("invalid start_time: {0}")]
    BadStartTime(TimeParseError),

    #[error("invalid end_time: {0}")]
    BadEndTime(TimeParseError),

    #[error("start_time must be before end_time")]
    StartNotBeforeEnd,

    #[error("interval_minutes must be positive")]
    IntervalNotPositive,

    #[error("interval_minutes cannot exceed 1440 (1 day)")]
    IntervalTooLarge,
}

/// Errors from strict `HH:MM` parsing.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("invalid time format '{0}' (expected HH:MM)")]
    Format(String),

    #[error("hour must be 0-23, got {0}")]
    HourRange(u32),

    #[error("minute must be 0-59, got {0}")]
    MinuteRange(u32),
}
