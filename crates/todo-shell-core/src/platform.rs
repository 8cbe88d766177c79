/// Desktop platform the shell is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS: full application menu, optional tray.
    MacOs,
    /// Windows: no application menu, tray always shown.
    Windows,
    /// Linux desktops: no application menu, tray always shown.
    Linux,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Whether this is the primary desktop target.
    ///
    /// Only the primary desktop attaches a native application menu and
    /// supports auto-launch registration.
    pub fn is_primary_desktop(self) -> bool {
        matches!(self, Platform::MacOs)
    }

    /// The tray is the only affordance on secondary platforms, so it cannot be hidden.
    pub fn tray_always_visible(self) -> bool {
        !self.is_primary_desktop()
    }
}
