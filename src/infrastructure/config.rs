//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError, Result};

/// Load configuration from `path`, or from the default location.
///
/// A missing default file yields defaults; a missing explicit file is an
/// error.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config(path, "file not found"));
            }
            load_config_from_file(path)
        }
        None => {
            let path = AppConfig::default_config_path();
            if path.exists() {
                load_config_from_file(&path)
            } else {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(AppConfig::default())
            }
        }
    }
}

/// Load configuration from a specific file.
///
/// # Errors
/// Returns error if file cannot be read or parsed.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read config file: {}", path.display()), e))?;

    let config = toml::from_str(&content).map_err(|e| AppError::config(path, e))?;
    tracing::info!(path = %path.display(), "Loaded configuration");

    Ok(config)
}
