use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const APP_DIR: &str = "tomato";

/// Get the config directory (~/.config/tomato on Linux)
pub fn get_config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_DIR))
}

/// Default path of the config file
pub fn config_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.json"))
}

/// Default path of the log file (~/.cache/tomato/tomato.log on Linux)
pub fn default_log_file() -> Result<PathBuf> {
    let base = dirs::cache_dir()
        .or_else(dirs::home_dir)
        .context("Could not determine cache directory")?;
    Ok(base.join(APP_DIR).join("tomato.log"))
}

/// Ensure the parent directory of `path` exists
pub fn ensure_parent_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
    }
    Ok(())
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    // Sync to disk
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_location() {
        if let Ok(path) = config_file() {
            assert!(path.ends_with("tomato/config.json"));
        }
    }

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        atomic_write(&test_file, "Hello, world!").unwrap();
        assert_eq!(fs::read_to_string(&test_file).unwrap(), "Hello, world!");

        atomic_write(&test_file, "replaced").unwrap();
        assert_eq!(fs::read_to_string(&test_file).unwrap(), "replaced");
    }

    #[test]
    fn test_ensure_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("file.log");

        ensure_parent_dir(&nested).unwrap();
        assert!(nested.parent().unwrap().is_dir());

        // Already present is fine
        ensure_parent_dir(&nested).unwrap();
    }
}
