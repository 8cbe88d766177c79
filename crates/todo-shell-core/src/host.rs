//! Everything the orchestrator needs from the outside world.

use crate::{
    IconBatch, MainWindow, MenuModel, RendererNotification, ShellResult, TrayBackend,
    UpdateDialogs, UpdateFeed,
};

use std::path::Path;

/// The native environment a [`Shell`](crate::Shell) drives.
///
/// All methods are called on the event-loop thread. Work that must not block
/// it (icon resolution, update downloads) is handed off and reported back as
/// events.
pub trait ShellHost: MainWindow + TrayBackend + UpdateFeed + UpdateDialogs {
    /// Push a notification to the renderer.
    fn notify_renderer(&mut self, notification: RendererNotification);

    /// Replace the native application menu with `menu`.
    fn install_app_menu(&mut self, menu: &MenuModel) -> ShellResult<()>;

    /// Hand a menu batch to background icon resolution.
    ///
    /// An error means the batch was not accepted and will never resolve.
    fn resolve_menu_icons(&mut self, batch: IconBatch) -> ShellResult<()>;

    /// Open a file or directory with the OS default handler.
    fn open_path(&mut self, path: &Path) -> ShellResult<()>;

    /// Open a URL with the OS default browser.
    fn open_url(&mut self, url: &str) -> ShellResult<()>;

    /// Clipboard image as PNG bytes, if the clipboard holds one.
    fn read_clipboard_png(&mut self) -> ShellResult<Option<Vec<u8>>>;

    /// Register or unregister launch at login.
    fn set_auto_launch(&mut self, enabled: bool) -> ShellResult<()>;

    /// Leave the event loop and terminate the process.
    fn request_exit(&mut self);
}
