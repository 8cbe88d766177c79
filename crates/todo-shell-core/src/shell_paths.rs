use crate::ShellResult;

use std::path::{Path, PathBuf};

use tracing::debug;

/// Directories the shell reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellPaths {
    /// Cached inline chat images (`open-image`).
    pub images_dir: PathBuf,
    /// Voice message storage owned by the renderer.
    pub voices_dir: PathBuf,
    /// Process-lifetime scratch space for avatars and clipboard images.
    pub scratch_dir: PathBuf,
}

impl ShellPaths {
    /// Standard layout under a per-user data directory.
    pub fn under(data_dir: &Path, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: data_dir.join("images"),
            voices_dir: data_dir.join("voices"),
            scratch_dir: scratch_dir.into(),
        }
    }

    /// Create any missing directory.
    pub fn ensure(&self) -> ShellResult<()> {
        for dir in [&self.images_dir, &self.voices_dir, &self.scratch_dir] {
            if !dir.exists() {
                std::fs::create_dir_all(dir)?;
                debug!(dir = ?dir, "Created directory");
            }
        }

        Ok(())
    }
}
