//! pendler — commute time tracker.
//!
//! `pendler schedule` runs the scheduler against a config file until
//! terminated, hot-reloading on config changes. `pendler fetch` performs
//! one measurement and prints a single record line to stdout.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use pendler_config::{load_config, validate, API_KEY_ENV};
use pendler_fetch::{sample_line, Fetcher};
use pendler_scheduler::{ConfigWatcher, Scheduler};

/// Matches the per-job deadline used by scheduled fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser, Debug)]
#[command(name = "pendler", version, about = "Commute time tracker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the scheduler with a config file until terminated.
    Schedule {
        /// Path to the config file.
        #[arg(long, env = "PENDLER_CONFIG", default_value = "/app/config.yaml")]
        config: PathBuf,
    },
    /// Fetch the commute time once and print one record line.
    Fetch {
        /// Starting point.
        #[arg(long)]
        from: String,
        /// Destination.
        #[arg(long)]
        to: String,
        /// Maps API key; falls back to the environment.
        #[arg(long, env = API_KEY_ENV)]
        key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Schedule { config } => run_schedule(config).await,
        Command::Fetch { from, to, key } => run_fetch(&from, &to, key).await,
    }
}

async fn run_schedule(config_path: PathBuf) -> Result<()> {
    let config = load_config(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    validate(&config).context("invalid config")?;

    let fetcher = Fetcher::new(config.api.key.clone(), &config.data_dir)
        .context("failed to create fetcher")?;
    let scheduler = Arc::new(Scheduler::new(Arc::new(fetcher)));

    let jobs = scheduler
        .start(config)
        .await
        .context("failed to start scheduler")?;
    info!(jobs, "scheduler running, press Ctrl+C to stop");

    let shutdown = CancellationToken::new();
    let watcher = ConfigWatcher::new(&config_path).context("failed to watch config file")?;
    let watcher_task = tokio::spawn(watcher.run(Arc::clone(&scheduler), shutdown.clone()));

    wait_for_signal().await?;
    info!("shutting down");
    shutdown.cancel();

    if let Err(e) = scheduler.stop().await {
        error!(error = %e, "error stopping scheduler");
    }
    let _ = watcher_task.await;
    Ok(())
}

async fn run_fetch(from: &str, to: &str, key: Option<String>) -> Result<()> {
    let Some(key) = key.filter(|k| !k.is_empty()) else {
        bail!("API key required (use --key or the {API_KEY_ENV} env var)");
    };

    // The data dir is unused by a one-off fetch but required by the
    // fetcher; point it at the system temp dir.
    let fetcher = Fetcher::new(key, std::env::temp_dir()).context("failed to create fetcher")?;

    let minutes = tokio::time::timeout(FETCH_TIMEOUT, fetcher.fetch(from, to))
        .await
        .context("fetch timed out")?
        .context("failed to fetch commute time")?;

    print!("{}", sample_line(Local::now(), minutes));
    Ok(())
}

/// Resolve on SIGINT or, on unix, SIGTERM.
async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        let mut term = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .context("failed to install SIGTERM handler")?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result.context("failed to listen for Ctrl+C")?,
            _ = term.recv() => {}
        }
        Ok(())
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .context("failed to listen for Ctrl+C")
    }
}
