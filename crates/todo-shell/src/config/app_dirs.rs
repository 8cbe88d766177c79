use crate::{AppError, AppResult};

use std::{fs, panic::Location, path::PathBuf};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use tracing::debug;

/// Per-user directories of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Holds `config.toml` and `window-state.toml`.
    pub config_dir: PathBuf,
    /// Holds `images/`, `voices/`, `updates/` and `logs/`.
    pub data_dir: PathBuf,
}

impl AppDirs {
    /// Platform directories for the application.
    #[track_caller]
    pub fn discover() -> AppResult<Self> {
        let proj_dirs = ProjectDirs::from("com", "todo-shell", "Todo").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get project directories".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self {
            config_dir: proj_dirs.config_dir().to_path_buf(),
            data_dir: proj_dirs.data_dir().to_path_buf(),
        })
    }

    /// Create the config and data directories if missing.
    pub fn ensure(&self) -> AppResult<()> {
        for dir in [
            &self.config_dir,
            &self.data_dir,
            &self.logs_dir(),
            &self.updates_dir(),
        ] {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
                debug!(dir = ?dir, "Created directory");
            }
        }

        Ok(())
    }

    /// Main configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Persisted window geometry.
    pub fn window_state_file(&self) -> PathBuf {
        self.config_dir.join("window-state.toml")
    }

    /// Downloaded release packages; survives restarts so a deferred
    /// install can still run at quit.
    pub fn updates_dir(&self) -> PathBuf {
        self.data_dir.join("updates")
    }

    /// Rolling log files.
    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}
