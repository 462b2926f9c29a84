//! Error types for compilation, registration, and lifecycle.

use pendler_config::ValidationError;

/// Errors surfaced by the scheduler API.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The supplied config failed semantic validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The trigger engine rejected an operation (job creation,
    /// registration, start, or teardown).
    #[error("trigger engine error: {0}")]
    Engine(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Filesystem watcher error while setting up the reload trigger.
    #[error("config watcher error: {0}")]
    Watch(#[from] notify::Error),

    /// `start` was called while a job set is already running.
    #[error("scheduler is already running")]
    AlreadyRunning,

    /// `reload` was called before `start`.
    #[error("scheduler is not running")]
    NotRunning,

    /// A scheduling invariant that validation should have guaranteed was
    /// violated. Not recoverable by retrying with the same input.
    #[error("internal scheduling invariant violated: {0}")]
    Internal(String),
}
