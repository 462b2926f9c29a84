//! Config file watcher driving hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use pendler_config::{load_config, validate};

use crate::core::Scheduler;
use crate::error::ScheduleError;

/// Editors write in bursts (truncate, write, rename, chmod); wait this
/// long after the first event and fold the rest into one reload.
const DEBOUNCE: Duration = Duration::from_millis(250);

/// Watches the config file and feeds validated changes into
/// [`Scheduler::reload`]. Every failure path keeps the previous
/// configuration and job set running.
pub struct ConfigWatcher {
    path: PathBuf,
    changes: mpsc::Receiver<()>,
    /// Held to keep the watcher thread alive.
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Set up filesystem watches for `path`.
    ///
    /// Watches the parent directory (atomic editor rewrites replace the
    /// file rather than modifying it) and additionally the file itself,
    /// which some bind-mount setups need; failure of the direct file
    /// watch is not fatal.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path
            .as_ref()
            .canonicalize()
            .unwrap_or_else(|_| path.as_ref().to_path_buf());

        let (tx, changes) = mpsc::channel(1);
        let watched = path.clone();
        let mut watcher = notify::recommended_watcher(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    let relevant = matches!(
                        event.kind,
                        EventKind::Create(_) | EventKind::Modify(_)
                    );
                    if relevant && event.paths.iter().any(|p| p == &watched) {
                        // A full channel already has a pending reload.
                        let _ = tx.try_send(());
                    }
                }
                Err(e) => warn!(error = %e, "config watcher error"),
            },
        )?;

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
            debug!(error = %e, "could not watch config file directly");
        }

        Ok(Self {
            path,
            changes,
            _watcher: watcher,
        })
    }

    /// Run until `shutdown` is cancelled, reloading the scheduler on
    /// each config change. Never blocks job dispatch; reload itself
    /// serializes on the scheduler's own lock.
    pub async fn run(mut self, scheduler: Arc<Scheduler>, shutdown: CancellationToken) {
        info!(path = %self.path.display(), "watching config file for changes");
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                received = self.changes.recv() => {
                    if received.is_none() {
                        break;
                    }
                    tokio::time::sleep(DEBOUNCE).await;
                    while self.changes.try_recv().is_ok() {}
                    self.reload_from_disk(&scheduler).await;
                }
            }
        }
        debug!("config watcher stopped");
    }

    /// Re-read, validate, and apply the config file. On any failure the
    /// previously active configuration and job set stay in place.
    async fn reload_from_disk(&self, scheduler: &Scheduler) {
        info!("config file changed, reloading");

        let config = match load_config(&self.path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "failed to reload config, keeping previous configuration");
                return;
            }
        };
        if let Err(e) = validate(&config) {
            warn!(error = %e, "invalid new config, keeping previous configuration");
            return;
        }

        match scheduler.reload(config).await {
            Ok(count) => info!(jobs = count, "config reloaded"),
            Err(e) => warn!(error = %e, "failed to apply new config, keeping previous job set"),
        }
    }
}
