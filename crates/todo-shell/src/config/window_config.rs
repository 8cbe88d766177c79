use crate::config::{
    default_background, default_login_height, default_login_width, default_window_height,
    default_window_width,
};

use todo_shell_core::WindowGeometry;

use serde::{Deserialize, Serialize};

/// Main window sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Width of the login screen.
    #[serde(default = "default_login_width")]
    pub login_width: u32,
    /// Height of the login screen.
    #[serde(default = "default_login_height")]
    pub login_height: u32,
    /// Width after login when nothing was persisted.
    #[serde(default = "default_window_width")]
    pub default_width: u32,
    /// Height after login when nothing was persisted.
    #[serde(default = "default_window_height")]
    pub default_height: u32,
    /// Webview background shown while the renderer loads, as `#RRGGBB`.
    #[serde(default = "default_background")]
    pub background: String,
}

impl WindowConfig {
    /// Geometry used after login on a fresh install.
    pub fn default_geometry(&self) -> WindowGeometry {
        WindowGeometry::sized(self.default_width, self.default_height)
    }

    /// Background as RGBA, falling back to opaque black on a malformed value.
    pub fn background_rgba(&self) -> (u8, u8, u8, u8) {
        let hex = self.background.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(0)
        };

        if hex.len() == 6 {
            (channel(0), channel(2), channel(4), 255)
        } else {
            (0, 0, 0, 255)
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            login_width: default_login_width(),
            login_height: default_login_height(),
            default_width: default_window_width(),
            default_height: default_window_height(),
            background: default_background(),
        }
    }
}
