//! Configuration loading and validation for the commute sampler.
//!
//! The YAML document declares which routes to monitor and when to sample
//! them. Loading and validation are separate steps: [`load_config`] reads
//! and parses the document (applying the API-key environment override),
//! [`validate`] checks it for semantic errors before any jobs are built.

mod error;
mod load;
mod schema;
mod time;
mod validate;

pub use self::error::{ConfigError, TimeParseError, ValidationError, WindowError};
pub use self::load::{load_config, API_KEY_ENV};
pub use self::schema::{ApiConfig, Config, Itinerary, ScheduleWindow};
pub use self::time::{parse_hhmm, resolve_weekday};
pub use self::validate::validate;
