use serde::{Deserialize, Serialize};

/// Renderer-owned preferences that affect the shell.
///
/// Replaced wholesale on every `settings-apply` message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellSettings {
    /// Keep an icon in the system tray (macOS only; always on elsewhere).
    pub show_on_tray: bool,
    /// Keep the main window above other windows.
    pub always_on_top: bool,
    /// Register the app to launch at login.
    pub startup: bool,
}
