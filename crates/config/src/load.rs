//! Reading and parsing the config document.

use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;
use crate::schema::Config;

/// Environment variable that overrides the document's `api.key` in all
/// load paths (startup and every reload).
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Read and parse the config file at `path`.
///
/// Applies the [`API_KEY_ENV`] override. The result is not yet validated;
/// call [`validate`](crate::validate) before building jobs from it.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let config: Config = serde_yaml::from_str(&contents)?;
    Ok(apply_key_override(config, std::env::var(API_KEY_ENV).ok()))
}

/// Replace the document's API key with the environment override, if set
/// and non-empty.
fn apply_key_override(mut config: Config, env_key: Option<String>) -> Config {
    if let Some(key) = env_key.filter(|k| !k.is_empty()) {
        debug!("using API key from {API_KEY_ENV}");
        config.api.key = key;
    }
    config
}
