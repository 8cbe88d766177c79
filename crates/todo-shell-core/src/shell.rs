//! The orchestrator: one owned state struct driven by OS, IPC and network events.

use crate::{
    ClickOutcome, CloseOutcome, MenuAction, MenuModel, Platform, RendererNotification,
    ResolvedSection, ShellHost, ShellPaths, ShellResult, ShellSettings, TrayBackend,
    TrayController, UpdateController, UpdateEvent, UpdateOutcome, WindowGeometry,
    WindowLifecycle,
};

use std::time::Instant;

use tracing::{debug, error, info, instrument, warn};

/// Desktop shell state.
///
/// Owned by the event loop; every method runs on that thread, so no field
/// needs synchronization.
pub struct Shell<H: ShellHost> {
    pub(crate) host: H,
    pub(crate) platform: Platform,
    pub(crate) paths: ShellPaths,
    pub(crate) settings: ShellSettings,
    pub(crate) tray: TrayController<<H as TrayBackend>::Handle>,
    pub(crate) menu: MenuModel,
    pub(crate) window: WindowLifecycle,
    pub(crate) update: UpdateController,
    pub(crate) suspended: bool,
}

impl<H: ShellHost> Shell<H> {
    /// Shell for a window created at login size.
    pub fn new(
        host: H,
        platform: Platform,
        paths: ShellPaths,
        persisted_geometry: WindowGeometry,
        update: UpdateController,
    ) -> Self {
        Self {
            host,
            platform,
            paths,
            settings: ShellSettings::default(),
            tray: TrayController::new(),
            menu: MenuModel::new(),
            window: WindowLifecycle::new(persisted_geometry),
            update,
            suspended: false,
        }
    }

    /// Native host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Native host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current settings.
    pub fn settings(&self) -> ShellSettings {
        self.settings
    }

    /// Platform the shell runs on.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Shell directories.
    pub fn paths(&self) -> &ShellPaths {
        &self.paths
    }

    /// Tray state.
    pub fn tray(&self) -> &TrayController<<H as TrayBackend>::Handle> {
        &self.tray
    }

    /// Application menu model.
    pub fn menu(&self) -> &MenuModel {
        &self.menu
    }

    /// Window lifecycle state.
    pub fn window(&self) -> &WindowLifecycle {
        &self.window
    }

    /// Update workflow state.
    pub fn update(&self) -> &UpdateController {
        &self.update
    }

    /// Whether the OS reported a suspend not yet followed by a resume.
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Startup work once the event loop runs.
    #[instrument(skip(self), fields(platform = ?self.platform))]
    pub fn start(&mut self) -> ShellResult<()> {
        self.paths.ensure()?;

        if self.platform.is_primary_desktop() {
            self.install_menu();
        }

        self.update_tray(0);

        info!("Shell started");
        Ok(())
    }

    /// Whether the tray icon should currently exist.
    pub fn tray_visible(&self) -> bool {
        self.platform.tray_always_visible() || self.settings.show_on_tray
    }

    /// Reconcile the tray icon with the settings and `unread`.
    pub fn update_tray(&mut self, unread: u32) {
        let visible = self.tray_visible();

        if let Err(e) = self.tray.update(&mut self.host, visible, unread) {
            error!(error = ?e, unread, "Failed to update tray");
        }
    }

    /// Scheduled tick: materialize a pending tray icon.
    pub fn on_tray_tick(&mut self) {
        if let Err(e) = self.tray.complete_pending(&mut self.host) {
            error!(error = ?e, "Failed to create tray icon");
        }
    }

    /// Left click on the tray icon.
    pub fn on_tray_click(&mut self, now: Instant) {
        match self.tray.register_click(now) {
            ClickOutcome::DoubleClick => self.show_window(),
            ClickOutcome::Armed => debug!("Tray click armed"),
        }
    }

    /// A tray or application menu item was clicked.
    #[instrument(skip(self))]
    pub fn on_menu_action(&mut self, menu_id: &str) {
        let Some(action) = self.menu.action_for(menu_id).cloned() else {
            debug!("Menu id without action");
            return;
        };

        match action {
            MenuAction::ShowWindow => self.show_window(),
            MenuAction::ShowPreferences => {
                self.show_window();
                self.host.notify_renderer(RendererNotification::ShowSettings);
            }
            MenuAction::CheckForUpdates => self.check_for_updates(),
            MenuAction::Quit => self.quit(),
            MenuAction::OpenConversation(id) => {
                self.show_window();
                self.host
                    .notify_renderer(RendererNotification::MessageChatto { id });
            }
            MenuAction::ShowUserInfo(id) => {
                self.show_window();
                self.host
                    .notify_renderer(RendererNotification::ShowUserinfo { id });
            }
        }
    }

    /// Icon resolution for a `menu-update` batch finished.
    pub fn on_icons_resolved(&mut self, resolved: Vec<ResolvedSection>) {
        if self.menu.apply_resolved(resolved) && self.platform.is_primary_desktop() {
            self.install_menu();
        }
    }

    /// Show and focus the main window if hidden.
    pub fn show_window(&mut self) {
        self.window.show(&mut self.host);
    }

    /// Renderer page finished loading.
    pub fn on_content_loaded(&mut self) {
        self.window.on_content_loaded(&mut self.host);
    }

    /// App re-activated, e.g. dock icon clicked.
    pub fn on_activate(&mut self) {
        self.window.on_activate(&mut self.host);
    }

    /// The window was moved or resized.
    pub fn on_geometry_changed(&mut self, geometry: WindowGeometry) {
        self.window.on_geometry_changed(geometry);
    }

    /// The user or OS asked to close the main window.
    pub fn on_close_requested(&mut self) -> CloseOutcome {
        let outcome = self.window.on_close_requested(&mut self.host);

        if outcome == CloseOutcome::Terminate {
            self.host.request_exit();
        }

        outcome
    }

    /// The renderer tried to navigate away from the app, or open a new window.
    pub fn on_external_navigation(&mut self, url: &str) {
        info!(url, "Opening external link");

        if let Err(e) = self.host.open_url(url) {
            error!(error = ?e, url, "Failed to open external link");
        }
    }

    /// Process is about to quit for a reason outside the shell's control.
    pub fn before_quit(&mut self) {
        self.window.set_force_quit();
        self.window.flush_geometry(&mut self.host);
        self.update.install_pending_on_quit(&mut self.host);
    }

    /// Explicit quit: arm force-quit and close the window for good.
    pub fn quit(&mut self) {
        self.window.set_force_quit();
        self.on_close_requested();
    }

    /// OS power suspend.
    pub fn on_suspend(&mut self) {
        debug!("System suspended");
        self.suspended = true;
    }

    /// OS power resume. The renderer is told only after an observed suspend.
    pub fn on_resume(&mut self) {
        if !self.suspended {
            debug!("Resume without suspend ignored");
            return;
        }

        self.suspended = false;
        self.host.notify_renderer(RendererNotification::OsResume);
    }

    /// Feed an event into the update workflow.
    pub fn on_update_event(&mut self, event: UpdateEvent) {
        if self.update.apply(&mut self.host, event) == UpdateOutcome::Relaunch {
            self.quit();
        }
    }

    /// User asked for an update check.
    pub fn check_for_updates(&mut self) {
        self.on_update_event(UpdateEvent::CheckRequested);
    }

    pub(crate) fn apply_settings(&mut self, settings: ShellSettings) {
        debug!(?settings, "Applying settings");
        self.settings = settings;

        self.host.set_always_on_top(settings.always_on_top);

        let unread = self.tray.last_unread();
        self.update_tray(unread);

        self.apply_auto_launch(settings.startup);
    }

    pub(crate) fn on_logined(&mut self) {
        self.window.on_logined(&mut self.host);
    }

    fn apply_auto_launch(&mut self, enabled: bool) {
        if !self.platform.is_primary_desktop() {
            if enabled {
                warn!(platform = ?self.platform, "Auto-launch unsupported");
                self.host.notify_renderer(RendererNotification::ShowErrors {
                    message: "Currently only supports the OSX.".to_string(),
                });
            }
            return;
        }

        if let Err(e) = self.host.set_auto_launch(enabled) {
            error!(error = ?e, enabled, "Failed to update auto-launch registration");
        }
    }

    fn install_menu(&mut self) {
        if let Err(e) = self.host.install_app_menu(&self.menu) {
            error!(error = ?e, "Failed to install application menu");
        }
    }
}
