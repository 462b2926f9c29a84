//! [`Fetcher`] — measurement plus append-only persistence.

use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::client::MapsClient;
use crate::error::FetchError;
use crate::record::sample_line;

/// Fetches commute times and appends samples under a data directory.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: MapsClient,
    data_dir: PathBuf,
}

impl Fetcher {
    /// Create a fetcher, ensuring the data directory exists.
    pub fn new(
        api_key: impl Into<String>,
        data_dir: impl Into<PathBuf>,
    ) -> Result<Self, FetchError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self {
            client: MapsClient::new(api_key),
            data_dir,
        })
    }

    /// Fetch the current commute time in minutes without persisting it.
    pub async fn fetch(&self, from: &str, to: &str) -> Result<f64, FetchError> {
        self.client.travel_minutes(from, to).await
    }

    /// Fetch the current commute time and append one sample line to
    /// `output_file` under the data directory. The file is opened for
    /// each write and created on first use; concurrent appends to the
    /// same file are each independently safe.
    pub async fn fetch_and_save(
        &self,
        from: &str,
        to: &str,
        output_file: &str,
    ) -> Result<PathBuf, FetchError> {
        let minutes = self.fetch(from, to).await?;
        let line = sample_line(Local::now(), minutes);
        let path = self.data_dir.join(output_file);
        append_line(&path, &line).await?;
        debug!(path = %path.display(), minutes, "sample appended");
        Ok(path)
    }

    /// The directory output files are written under.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

async fn append_line(path: &Path, line: &str) -> Result<(), FetchError> {
    let mut file = tokio::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
