//! Ownership wrapper over the trigger engine.
//!
//! The engine is consumed strictly as "register a recurring trigger,
//! receive callbacks": handles come back opaque and are used only to
//! count and tear down, never inspected.

use std::future::Future;
use std::pin::Pin;

use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::debug;
use uuid::Uuid;

use crate::compile::CompiledTrigger;
use crate::cron::normalize;
use crate::error::ScheduleError;

/// Boxed future returned by a job callback.
pub(crate) type JobFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Opaque reference to one registered recurring trigger.
#[derive(Debug, Clone)]
pub(crate) struct JobHandle {
    id: Uuid,
    name: String,
}

/// One generation of registered jobs under a dedicated engine instance.
///
/// A set is built, fully registered, started, and eventually torn down as
/// a unit; it is never mutated while live.
pub(crate) struct JobSet {
    engine: JobScheduler,
    handles: Vec<JobHandle>,
}

impl JobSet {
    pub(crate) async fn build() -> Result<Self, ScheduleError> {
        Ok(Self {
            engine: JobScheduler::new().await?,
            handles: Vec::new(),
        })
    }

    /// Register one recurring trigger. Jobs fire on local wall-clock
    /// time; the five-field expression is adapted to the engine's
    /// six-field syntax here.
    pub(crate) async fn register<F>(
        &mut self,
        trigger: &CompiledTrigger,
        run: F,
    ) -> Result<(), ScheduleError>
    where
        F: FnMut(Uuid, JobScheduler) -> JobFuture + Send + Sync + 'static,
    {
        let expression = normalize(&trigger.expression);
        let job = Job::new_async_tz(expression.as_str(), chrono::Local, run)?;
        let id = self.engine.add(job).await?;
        debug!(job = %trigger.name, id = %id, cron = %trigger.expression, "registered job");
        self.handles.push(JobHandle {
            id,
            name: trigger.name.clone(),
        });
        Ok(())
    }

    /// Begin dispatching. Triggers fire independently per job from here
    /// until [`shutdown`](Self::shutdown).
    pub(crate) async fn start(&mut self) -> Result<(), ScheduleError> {
        self.engine.start().await?;
        Ok(())
    }

    /// Tear down every registered trigger. After this returns no job in
    /// this set fires again; in-flight callbacks run to completion under
    /// their own deadline.
    pub(crate) async fn shutdown(&mut self) -> Result<(), ScheduleError> {
        for handle in &self.handles {
            debug!(job = %handle.name, id = %handle.id, "tearing down job");
        }
        self.engine.shutdown().await?;
        Ok(())
    }

    /// Number of registered jobs in this set.
    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }
}
