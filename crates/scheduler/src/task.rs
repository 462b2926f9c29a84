//! Per-job task wrapper: deadline, failure isolation, panic recovery.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use tokio_cron_scheduler::JobScheduler;
use tracing::{error, info};
use uuid::Uuid;

use pendler_config::Itinerary;
use pendler_fetch::{FetchError, Fetcher};

use crate::engine::JobFuture;

/// Deadline for one measurement + append, counted from the trigger
/// firing.
pub(crate) const TASK_TIMEOUT: Duration = Duration::from_secs(30);

/// A single firing's failure. Contained here: logged, never escalated.
#[derive(Debug, thiserror::Error)]
pub(crate) enum TaskError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("timed out after {}s", TASK_TIMEOUT.as_secs())]
    Timeout,
}

/// Build the callback registered for every trigger of `itinerary`.
pub(crate) fn route_task(
    itinerary: Arc<Itinerary>,
    fetcher: Arc<Fetcher>,
) -> impl FnMut(Uuid, JobScheduler) -> JobFuture + Send + Sync + 'static {
    move |_id, _engine| {
        let itinerary = Arc::clone(&itinerary);
        let fetcher = Arc::clone(&fetcher);
        Box::pin(async move {
            guard(&itinerary.id, run_once(&itinerary, &fetcher)).await;
        })
    }
}

/// Recovery boundary around one firing: any failure, including a panic
/// raised inside the attempt, becomes a log line. Nothing unwinds into
/// the engine's dispatch loop and sibling jobs are unaffected.
pub(crate) async fn guard<F>(itinerary_id: &str, attempt: F)
where
    F: Future<Output = Result<(), TaskError>>,
{
    match AssertUnwindSafe(attempt).catch_unwind().await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(itinerary = %itinerary_id, error = %e, "fetch failed"),
        Err(panic) => error!(
            itinerary = %itinerary_id,
            panic = panic_message(panic.as_ref()),
            "job panicked"
        ),
    }
}

async fn run_once(itinerary: &Itinerary, fetcher: &Fetcher) -> Result<(), TaskError> {
    info!(
        itinerary = %itinerary.id,
        from = %itinerary.from,
        to = %itinerary.to,
        "fetching commute time"
    );
    let saved = tokio::time::timeout(
        TASK_TIMEOUT,
        fetcher.fetch_and_save(&itinerary.from, &itinerary.to, &itinerary.output_file),
    )
    .await
    .map_err(|_| TaskError::Timeout)??;
    info!(itinerary = %itinerary.id, path = %saved.display(), "sample saved");
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn guard_contains_panics() {
        // Completing at all is the assertion: the panic must not unwind
        // out of the guard.
        guard("panicky-route", async {
            panic!("measurement blew up");
        })
        .await;
    }

    #[tokio::test]
    async fn guard_contains_errors() {
        guard("failing-route", async { Err(TaskError::Timeout) }).await;
    }

    #[tokio::test]
    async fn guard_passes_success_through() {
        guard("healthy-route", async { Ok(()) }).await;
    }

    #[test]
    fn panic_message_handles_common_payloads() {
        assert_eq!(panic_message(&"boom"), "boom");
        assert_eq!(panic_message(&"boom".to_string()), "boom");
        assert_eq!(panic_message(&42_u32), "non-string panic payload");
    }
}
