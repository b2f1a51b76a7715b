use crate::persistence::{default_log_file, ensure_parent_dir, AppConfig};
use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Resolve where the log file lives for this config
pub fn log_path(config: &AppConfig) -> Result<PathBuf> {
    match &config.log_file {
        Some(path) => Ok(path.clone()),
        None => default_log_file(),
    }
}

/// Route the `log` facade to a file. The TUI owns stdout, so nothing goes to the terminal.
pub fn init_logging(config: &AppConfig) -> Result<PathBuf> {
    let level = config.level_filter()?;
    let path = log_path(config)?;
    ensure_parent_dir(&path)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(simplelog::LevelFilter::Error)
        .build();

    WriteLogger::init(level, log_config, file).context("Logger already initialized")?;
    log::info!("tomato {} started", env!("CARGO_PKG_VERSION"));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_override() {
        let config = AppConfig {
            log_file: Some(PathBuf::from("/var/tmp/custom.log")),
            ..AppConfig::default()
        };
        assert_eq!(log_path(&config).unwrap(), PathBuf::from("/var/tmp/custom.log"));
    }

    #[test]
    fn test_default_log_path() {
        if let Ok(path) = log_path(&AppConfig::default()) {
            assert!(path.ends_with("tomato/tomato.log"));
        }
    }
}
