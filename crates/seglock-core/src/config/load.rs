//! Configuration loading from files and environment
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults
//! 2. Global config: `<config dir>/seglock/config.toml`
//! 3. Explicit config file (the CLI's `--config`)
//! 4. Environment variables: `SEGLOCK_*`

use std::path::{Path, PathBuf};

use super::types::Config;
use crate::{Error, Result};

/// Load configuration from all sources with hierarchy
///
/// # Errors
///
/// Returns error if:
/// - A config file cannot be read or is malformed TOML
/// - An environment override cannot be parsed
/// - The resulting values fail validation
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = Config::default();

    let config = match global_config_path() {
        Some(global_path) if global_path.exists() => {
            let global = load_toml_file(&global_path)?;
            config.merge(global)
        }
        _ => config,
    };

    let config = match explicit {
        Some(path) => {
            let file = load_toml_file(path)?;
            config.merge(file)
        }
        None => config,
    };

    let config = config.apply_env_vars()?;
    config.validate()?;

    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Get path to global config file
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "seglock")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

/// Load a TOML file into a Config
///
/// # Errors
///
/// Returns error if the path is a directory, cannot be read, or holds
/// malformed TOML
pub fn load_toml_file(path: &Path) -> Result<Config> {
    if path.is_dir() {
        return Err(Error::io_error(format!(
            "Config path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::io_error(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::parse_error(format!(
            "Failed to parse config file {}: {e}",
            path.display()
        ))
    })
}

fn env_override<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    std::env::var(name).ok().map_or(Ok(None), |value| {
        value
            .parse()
            .map(Some)
            .map_err(|e| Error::invalid_config(format!("Invalid {name} value '{value}': {e}")))
    })
}

impl Config {
    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns error if environment variable values are invalid
    pub fn apply_env_vars(mut self) -> Result<Self> {
        if let Some(value) = env_override("SEGLOCK_MIN_SEGMENTS")? {
            self.limits.min_segments = value;
        }
        if let Some(value) = env_override("SEGLOCK_MAX_SEGMENTS")? {
            self.limits.max_segments = value;
        }
        if let Some(value) = env_override("SEGLOCK_MAX_SEGMENT_LENGTH")? {
            self.limits.max_segment_length = value;
        }
        if let Some(value) = env_override::<String>("SEGLOCK_LOG_LEVEL")? {
            if value.is_empty() {
                return Err(Error::invalid_config(
                    "SEGLOCK_LOG_LEVEL cannot be empty - unset the variable or provide a level",
                ));
            }
            self.logging.level = value;
        }
        Ok(self)
    }
}
