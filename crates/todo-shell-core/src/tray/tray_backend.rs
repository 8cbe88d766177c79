use crate::{ShellResult, TrayGlyph, TrayMenuModel};

/// Native tray operations.
///
/// Tray handles are typically `!Send`, so implementations live on the UI thread.
pub trait TrayBackend {
    /// Owned native tray handle. Dropping or destroying it removes the icon.
    type Handle;

    /// Create a tray icon.
    fn create_tray(&mut self, glyph: TrayGlyph, menu: &TrayMenuModel) -> ShellResult<Self::Handle>;

    /// Replace the icon of a live tray.
    fn set_tray_icon(&mut self, handle: &mut Self::Handle, glyph: TrayGlyph) -> ShellResult<()>;

    /// Replace the context menu of a live tray.
    fn set_tray_menu(&mut self, handle: &mut Self::Handle, menu: &TrayMenuModel) -> ShellResult<()>;

    /// Remove a tray icon.
    fn destroy_tray(&mut self, handle: Self::Handle);

    /// Ask for a tray tick on the next event-loop iteration.
    fn schedule_tray_tick(&mut self);
}
