//! TOML persistence with atomic writes.

use crate::{AppError, AppResult};

use std::{fs, io::Write, panic::Location, path::Path};

use error_location::ErrorLocation;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

/// Read and parse `path`. Returns `None` if the file does not exist.
#[track_caller]
#[instrument]
pub(crate) fn load_toml<T: DeserializeOwned>(path: &Path) -> AppResult<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
        reason: format!("Failed to read {}: {}", path.display(), e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let value = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
        reason: format!("Failed to parse {}: {}", path.display(), e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Some(value))
}

/// Serialize `value` to `path` using atomic write pattern.
///
/// Writes to a temporary file first, then renames to prevent corruption
/// if the process crashes during the write.
#[track_caller]
#[instrument(skip(value))]
pub(crate) fn save_toml<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    let contents = toml::to_string_pretty(value).map_err(|e| AppError::ConfigError {
        reason: format!("Failed to serialize {}: {}", path.display(), e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let temp_path = path.with_extension("toml.tmp");

    let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
        reason: format!("Failed to create temp file: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    temp_file
        .write_all(contents.as_bytes())
        .map_err(|e| AppError::ConfigError {
            reason: format!("Failed to write temp file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    temp_file.sync_all().map_err(|e| AppError::ConfigError {
        reason: format!("Failed to sync temp file: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    fs::rename(&temp_path, path).map_err(|e| AppError::ConfigError {
        reason: format!("Failed to rename temp file to final: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    debug!(path = ?path, "Saved (atomic write)");

    Ok(())
}
