use crate::{
    AppResult,
    config::{load_toml, save_toml},
};

use todo_shell_core::WindowGeometry;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Window geometry persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    /// Geometry of the resized window.
    pub geometry: WindowGeometry,
    #[serde(skip)]
    path: PathBuf,
}

impl WindowState {
    /// Load from `path`, or start from `fallback` if absent or unreadable.
    pub fn load_or(path: &Path, fallback: WindowGeometry) -> Self {
        let geometry = match load_toml::<WindowState>(path) {
            Ok(Some(state)) => state.geometry,
            Ok(None) => fallback,
            Err(e) => {
                warn!(error = ?e, "Window state unreadable, using defaults");
                fallback
            }
        };

        Self {
            geometry,
            path: path.to_path_buf(),
        }
    }

    /// Replace and persist the geometry.
    pub fn save(&mut self, geometry: WindowGeometry) -> AppResult<()> {
        self.geometry = geometry;
        save_toml(&self.path, self)?;

        debug!(?geometry, "Window state saved");
        Ok(())
    }
}
