//! TOML configuration discovery for the CLI.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use kinfolk::{KinfolkError, config::AppConfig};

/// Errors raised while locating or reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration `{path}`: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for KinfolkError {
    fn from(err: ConfigError) -> Self {
        KinfolkError::Config(err.to_string())
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    Explicit,
    WorkingDirectory,
    Platform,
}

/// Implicit locations, most specific first.
fn implicit_candidates() -> Vec<(ConfigSource, PathBuf)> {
    let mut candidates = vec![(
        ConfigSource::WorkingDirectory,
        PathBuf::from("kinfolk").join("config.toml"),
    )];
    match ProjectDirs::from("com", "kinfolk", "kinfolk") {
        Some(dirs) => candidates.push((ConfigSource::Platform, dirs.config_dir().join("config.toml"))),
        None => debug!("Could not determine platform-specific config directory"),
    }
    candidates
}

/// Loads the application configuration.
///
/// An explicit path must exist. Otherwise `kinfolk/config.toml` under the
/// working directory is tried, then `config.toml` in the platform config
/// directory, and finally the built-in defaults are used.
///
/// # Errors
///
/// Returns [`KinfolkError::Config`] if the explicit file is missing or a
/// found file is not valid TOML for [`AppConfig`].
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, KinfolkError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        return read_config(ConfigSource::Explicit, path);
    }

    for (source, path) in implicit_candidates() {
        if path.exists() {
            return read_config(source, &path);
        }
        debug!(source:? = source, path = path.display().to_string(); "No configuration file");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn read_config(source: ConfigSource, path: &Path) -> Result<AppConfig, KinfolkError> {
    info!(source:? = source, path = path.display().to_string(); "Loading configuration");

    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })?;
    Ok(config)
}
