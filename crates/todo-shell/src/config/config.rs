//! Configuration management for todo-shell.
//!
//! Loads `config.toml` from the per-user config directory, creating a default
//! on first run.

use crate::{
    AppResult,
    config::{AppConfig, AppDirs, RendererConfig, UpdateConfig, WindowConfig, load_toml, save_toml},
};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Application identity.
    #[serde(default)]
    pub app: AppConfig,
    /// Main window sizing.
    #[serde(default)]
    pub window: WindowConfig,
    /// Renderer location.
    #[serde(default)]
    pub renderer: RendererConfig,
    /// Self-update feed.
    #[serde(default)]
    pub update: UpdateConfig,
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    #[track_caller]
    #[instrument(skip(dirs))]
    pub fn load(dirs: &AppDirs) -> AppResult<Self> {
        let config_path = dirs.config_file();

        match load_toml(&config_path)? {
            Some(config) => {
                info!(config_path = ?config_path, "Configuration loaded");
                Ok(config)
            }
            None => {
                info!("No config found, creating default");
                let config = Config::default();
                config.save(dirs)?;
                Ok(config)
            }
        }
    }

    /// Save configuration to disk.
    #[track_caller]
    #[instrument(skip(self, dirs))]
    pub fn save(&self, dirs: &AppDirs) -> AppResult<()> {
        let config_path = dirs.config_file();
        save_toml(&config_path, self)?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");
        Ok(())
    }
}
