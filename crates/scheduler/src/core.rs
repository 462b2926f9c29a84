//! [`Scheduler`] — owns the live job set and the reload transition.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use pendler_config::{validate, Config};
use pendler_fetch::Fetcher;

use crate::compile::compile;
use crate::engine::JobSet;
use crate::error::ScheduleError;
use crate::task::route_task;

/// The live configuration and the job set it produced. Exactly one
/// exists at a time; reload replaces it wholesale, never mutates it.
struct ActiveSchedule {
    config: Arc<Config>,
    jobs: JobSet,
}

/// Registers one recurring job per compiled trigger and manages the job
/// set across start, stop, and hot reload.
///
/// `start`/`stop`/`reload` serialize on an internal mutex: the active
/// schedule is single-writer state. Reads (`job_count`, `is_running`)
/// take the same lock briefly and may interleave with job dispatch, but
/// never with a transition in progress.
pub struct Scheduler {
    fetcher: Arc<Fetcher>,
    active: Mutex<Option<ActiveSchedule>>,
}

impl Scheduler {
    pub fn new(fetcher: Arc<Fetcher>) -> Self {
        Self {
            fetcher,
            active: Mutex::new(None),
        }
    }

    /// Validate and compile `config`, register its full job set, and
    /// begin dispatching. Errors if the scheduler is already running.
    pub async fn start(&self, config: Config) -> Result<usize, ScheduleError> {
        let mut active = self.active.lock().await;
        if active.is_some() {
            return Err(ScheduleError::AlreadyRunning);
        }

        let mut jobs = self.build_jobs(&config).await?;
        if let Err(e) = jobs.start().await {
            let _ = jobs.shutdown().await;
            return Err(e);
        }

        let count = jobs.len();
        *active = Some(ActiveSchedule {
            config: Arc::new(config),
            jobs,
        });
        info!(jobs = count, "scheduler started");
        Ok(count)
    }

    /// Replace the running job set with one compiled from `config`,
    /// make-before-break: the new set is fully registered and started
    /// while the old set is still live; only then is the old set torn
    /// down and the new state published. On any error before that
    /// handoff the old set keeps running untouched.
    pub async fn reload(&self, config: Config) -> Result<usize, ScheduleError> {
        let mut active = self.active.lock().await;
        let current = active.as_mut().ok_or(ScheduleError::NotRunning)?;

        info!("reloading scheduler configuration");
        let mut next = self.build_jobs(&config).await?;
        if let Err(e) = next.start().await {
            let _ = next.shutdown().await;
            return Err(e);
        }

        let count = next.len();
        let mut previous = std::mem::replace(
            current,
            ActiveSchedule {
                config: Arc::new(config),
                jobs: next,
            },
        );
        if let Err(e) = previous.jobs.shutdown().await {
            warn!(error = %e, "error tearing down previous job set");
        }
        info!(jobs = count, "scheduler reloaded");
        Ok(count)
    }

    /// Tear down the running job set. A no-op when already stopped.
    pub async fn stop(&self) -> Result<(), ScheduleError> {
        let mut active = self.active.lock().await;
        match active.take() {
            Some(mut state) => {
                state.jobs.shutdown().await?;
                info!("scheduler stopped");
                Ok(())
            }
            None => {
                debug!("stop called while not running");
                Ok(())
            }
        }
    }

    /// Validate, compile, and register a complete job set, not yet
    /// started.
    async fn build_jobs(&self, config: &Config) -> Result<JobSet, ScheduleError> {
        validate(config)?;
        let triggers = compile(config)?;

        let mut jobs = JobSet::build().await?;
        for trigger in &triggers {
            let task = route_task(Arc::clone(&trigger.itinerary), Arc::clone(&self.fetcher));
            jobs.register(trigger, task).await?;
        }
        Ok(jobs)
    }

    /// Number of registered jobs in the live set; 0 when stopped.
    pub async fn job_count(&self) -> usize {
        self.active
            .lock()
            .await
            .as_ref()
            .map(|state| state.jobs.len())
            .unwrap_or(0)
    }

    pub async fn is_running(&self) -> bool {
        self.active.lock().await.is_some()
    }

    /// The configuration the live job set was compiled from.
    pub async fn active_config(&self) -> Option<Arc<Config>> {
        self.active
            .lock()
            .await
            .as_ref()
            .map(|state| Arc::clone(&state.config))
    }
}
