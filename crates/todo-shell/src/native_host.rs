//! Native side of the shell: the window, webview, menus and OS services.

use crate::{
    AppCommand, AppResult, ClipboardReader, ShellEvent,
    bridge::{dispatch_script, reply_script},
    config::{Config, WindowState},
    native_menu::build_app_menu,
    webview_window::{build_webview, build_window},
};

use todo_shell_core::{
    IconBatch, IpcReply, MainWindow, MenuModel, ReleaseInfo, RendererNotification, ShellError,
    ShellHost, ShellResult, UpdateFeed, WindowGeometry,
};

use std::{panic::Location, path::Path};

use auto_launch::AutoLaunchBuilder;
use error_location::ErrorLocation;
use tao::{
    dpi::{LogicalPosition, LogicalSize},
    event_loop::{EventLoopProxy, EventLoopWindowTarget},
    window::Window,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use tray_icon::menu::Menu;
use wry::WebView;

/// [`ShellHost`] over tao, wry, tray-icon and the OS.
///
/// Lives on the main thread: window, webview, tray icon and menus are `!Send`.
pub struct NativeHost {
    pub(crate) app_name: String,
    pub(crate) version: String,
    pub(crate) proxy: EventLoopProxy<ShellEvent>,
    command_tx: mpsc::Sender<AppCommand>,
    window: Option<Window>,
    webview: Option<WebView>,
    window_state: WindowState,
    app_menu: Option<Menu>,
    clipboard: Option<ClipboardReader>,
    exit_requested: bool,
}

impl NativeHost {
    /// Create the main window and its webview.
    #[instrument(skip_all)]
    pub(crate) fn new(
        target: &EventLoopWindowTarget<ShellEvent>,
        config: &Config,
        window_state: WindowState,
        proxy: EventLoopProxy<ShellEvent>,
        command_tx: mpsc::Sender<AppCommand>,
    ) -> AppResult<Self> {
        let window = build_window(target, config, window_state.geometry)?;
        let webview = build_webview(&window, config, &proxy)?;

        info!("Main window created");

        Ok(Self {
            app_name: config.app.name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            proxy,
            command_tx,
            window: Some(window),
            webview: Some(webview),
            window_state,
            app_menu: None,
            clipboard: None,
            exit_requested: false,
        })
    }

    /// Whether the shell asked to leave the event loop.
    pub(crate) fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Logical geometry of the main window, if it still exists.
    pub(crate) fn current_geometry(&self) -> Option<WindowGeometry> {
        let window = self.window.as_ref()?;
        let scale = window.scale_factor();

        let size: LogicalSize<f64> = window.inner_size().to_logical(scale);
        let position: Option<LogicalPosition<f64>> =
            window.outer_position().ok().map(|p| p.to_logical(scale));

        Some(WindowGeometry {
            x: position.map(|p| p.x.round() as i32),
            y: position.map(|p| p.y.round() as i32),
            width: size.width.round() as u32,
            height: size.height.round() as u32,
        })
    }

    /// Settle the renderer promise awaiting `reply`.
    pub(crate) fn deliver_reply(&self, reply: &IpcReply) {
        self.evaluate(&reply_script(reply));
    }

    fn evaluate(&self, script: &str) {
        let Some(webview) = self.webview.as_ref() else {
            debug!("Webview released, script dropped");
            return;
        };

        if let Err(e) = webview.evaluate_script(script) {
            error!(error = %e, "Failed to evaluate script in renderer");
        }
    }

    fn send_command(&self, command: AppCommand) {
        if let Err(e) = self.try_send_command(command) {
            error!(error = ?e, "Failed to reach network runtime");
        }
    }

    #[track_caller]
    fn try_send_command(&self, command: AppCommand) -> ShellResult<()> {
        self.command_tx
            .try_send(command)
            .map_err(|e| desktop_error(format!("Network runtime unavailable: {}", e)))
    }
}

impl MainWindow for NativeHost {
    fn is_visible(&self) -> bool {
        self.window.as_ref().is_some_and(Window::is_visible)
    }

    fn show(&mut self) {
        if let Some(window) = self.window.as_ref() {
            window.set_visible(true);
        }
    }

    fn hide(&mut self) {
        if let Some(window) = self.window.as_ref() {
            window.set_visible(false);
        }
    }

    fn focus(&mut self) {
        if let Some(window) = self.window.as_ref() {
            window.set_focus();
        }
    }

    fn set_always_on_top(&mut self, always_on_top: bool) {
        if let Some(window) = self.window.as_ref() {
            window.set_always_on_top(always_on_top);
        }
    }

    fn set_resizable(&mut self, resizable: bool) {
        if let Some(window) = self.window.as_ref() {
            window.set_resizable(resizable);
        }
    }

    fn set_geometry(&mut self, geometry: WindowGeometry) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        window.set_inner_size(LogicalSize::new(geometry.width, geometry.height));
        if let (Some(x), Some(y)) = (geometry.x, geometry.y) {
            window.set_outer_position(LogicalPosition::new(x, y));
        }
    }

    fn release(&mut self) {
        // The webview must go before the window hosting it.
        self.webview = None;
        self.window = None;
        debug!("Main window released");
    }

    fn persist_geometry(&mut self, geometry: &WindowGeometry) -> ShellResult<()> {
        self.window_state
            .save(*geometry)
            .map_err(|e| desktop_error(format!("Failed to save window state: {}", e)))
    }
}

impl UpdateFeed for NativeHost {
    fn begin_check(&mut self) {
        self.send_command(AppCommand::CheckForUpdates);
    }

    #[instrument(skip(self), fields(version = %release.version))]
    fn install_and_relaunch(&mut self, release: &ReleaseInfo) -> ShellResult<()> {
        launch_installer(release)
    }

    #[instrument(skip(self), fields(version = %release.version))]
    fn install_on_quit(&mut self, release: &ReleaseInfo) -> ShellResult<()> {
        launch_installer(release)
    }
}

impl ShellHost for NativeHost {
    fn notify_renderer(&mut self, notification: RendererNotification) {
        match dispatch_script(&notification) {
            Ok(script) => self.evaluate(&script),
            Err(e) => error!(error = ?e, "Failed to notify renderer"),
        }
    }

    #[instrument(skip_all)]
    fn install_app_menu(&mut self, menu: &MenuModel) -> ShellResult<()> {
        let app_menu = build_app_menu(menu, &self.app_name, &self.version)?;

        #[cfg(target_os = "macos")]
        app_menu.init_for_nsapp();

        self.app_menu = Some(app_menu);
        debug!("Application menu installed");
        Ok(())
    }

    fn resolve_menu_icons(&mut self, batch: IconBatch) -> ShellResult<()> {
        self.try_send_command(AppCommand::ResolveMenuIcons(batch))
    }

    fn open_path(&mut self, path: &Path) -> ShellResult<()> {
        open::that_detached(path)
            .map_err(|e| desktop_error(format!("Failed to open {:?}: {}", path, e)))
    }

    fn open_url(&mut self, url: &str) -> ShellResult<()> {
        open::that_detached(url)
            .map_err(|e| desktop_error(format!("Failed to open {}: {}", url, e)))
    }

    fn read_clipboard_png(&mut self) -> ShellResult<Option<Vec<u8>>> {
        let reader = match self.clipboard.take() {
            Some(reader) => reader,
            None => ClipboardReader::new().map_err(|e| desktop_error(e.to_string()))?,
        };
        let clipboard = self.clipboard.insert(reader);

        clipboard
            .read_png()
            .map_err(|e| desktop_error(e.to_string()))
    }

    #[instrument(skip(self))]
    fn set_auto_launch(&mut self, enabled: bool) -> ShellResult<()> {
        let exe = std::env::current_exe()?;

        let auto_launch = AutoLaunchBuilder::new()
            .set_app_name(&self.app_name)
            .set_app_path(&exe.to_string_lossy())
            .build()
            .map_err(|e| desktop_error(format!("Failed to configure auto-launch: {}", e)))?;

        let result = if enabled {
            auto_launch.enable()
        } else {
            auto_launch.disable()
        };

        match result {
            Ok(()) => {
                info!("Auto-launch updated");
                Ok(())
            }
            // Disabling an entry that was never registered.
            Err(e) if !enabled => {
                warn!(error = %e, "Auto-launch entry not removed");
                Ok(())
            }
            Err(e) => Err(desktop_error(format!("Failed to enable auto-launch: {}", e))),
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;

        if self.proxy.send_event(ShellEvent::Exit).is_err() {
            warn!("Event loop already closed");
        }
    }
}

/// Open the downloaded package with the OS installer, detached from this process.
#[track_caller]
fn launch_installer(release: &ReleaseInfo) -> ShellResult<()> {
    let package = release.package.as_deref().ok_or_else(|| ShellError::Update {
        reason: format!("Release {} has no downloaded package", release.version),
        location: ErrorLocation::from(Location::caller()),
    })?;

    open::that_detached(package).map_err(|e| ShellError::Update {
        reason: format!("Failed to launch installer {:?}: {}", package, e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    info!(package = ?package, "Installer launched");
    Ok(())
}

#[track_caller]
fn desktop_error(reason: String) -> ShellError {
    ShellError::Desktop {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}
