use super::files::{atomic_write, ensure_parent_dir};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unknown log level '{0}' (expected off, error, warn, info, debug or trace)")]
    LogLevel(String),
    #[error("config already exists: {0}")]
    AlreadyExists(PathBuf),
    #[error("failed to write config: {0}")]
    Write(#[from] anyhow::Error),
}

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Ring the terminal bell when a session completes
    pub bell: bool,
    /// Post a desktop notification when a session completes
    pub notify: bool,
    pub log_level: String,
    /// Overrides the default log location
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bell: true,
            notify: true,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Parse `log_level` into a filter
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        match self.log_level.trim().to_lowercase().as_str() {
            "off" => Ok(LevelFilter::Off),
            "error" => Ok(LevelFilter::Error),
            "warn" | "warning" => Ok(LevelFilter::Warn),
            "info" => Ok(LevelFilter::Info),
            "debug" => Ok(LevelFilter::Debug),
            "trace" => Ok(LevelFilter::Trace),
            _ => Err(ConfigError::LogLevel(self.log_level.clone())),
        }
    }
}

/// Load config from a JSON file. A missing file yields defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.level_filter()?;
    Ok(config)
}

/// Save config to a JSON file
pub fn save_config<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(config).map_err(anyhow::Error::from)?;
    ensure_parent_dir(path)?;
    atomic_write(path, &json)?;
    Ok(())
}

/// Write a default config file, refusing to overwrite an existing one
pub fn init_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    let config = AppConfig::default();
    save_config(path, &config)?;
    Ok(config)
}
