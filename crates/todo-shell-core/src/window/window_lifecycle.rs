//! Main window lifecycle: minimize-to-tray close handling, login sizing and
//! geometry persistence.

use crate::{MainWindow, WindowGeometry, WindowPhase};

use tracing::{debug, error, info, instrument};

/// What a close request resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Close suppressed, window hidden.
    Hidden,
    /// Window released; the process must terminate.
    Terminate,
}

/// Translates OS window intents into show/hide/quit semantics.
#[derive(Debug, Clone)]
pub struct WindowLifecycle {
    phase: WindowPhase,
    force_quit: bool,
    geometry: WindowGeometry,
    geometry_dirty: bool,
}

impl WindowLifecycle {
    /// Lifecycle for a window created at login size.
    ///
    /// `persisted` is the geometry saved by the previous session; it is
    /// restored once the user has logged in.
    pub fn new(persisted: WindowGeometry) -> Self {
        Self {
            phase: WindowPhase::LoginSizing,
            force_quit: false,
            geometry: persisted,
            geometry_dirty: false,
        }
    }

    /// Current sizing phase.
    pub fn phase(&self) -> WindowPhase {
        self.phase
    }

    /// Whether the next close terminates the process.
    pub fn force_quit(&self) -> bool {
        self.force_quit
    }

    /// Last known geometry of the resized window.
    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    /// Arm force-quit. One way: there is no way to clear it.
    pub fn set_force_quit(&mut self) {
        if !self.force_quit {
            info!("Force-quit armed");
        }
        self.force_quit = true;
    }

    /// Renderer content finished loading.
    pub fn on_content_loaded<W: MainWindow>(&mut self, window: &mut W) {
        window.show();
        window.focus();
    }

    /// Show and focus the window if it is hidden.
    pub fn show<W: MainWindow>(&mut self, window: &mut W) {
        if !window.is_visible() {
            window.show();
            window.focus();
        }
    }

    /// Dock icon clicked or app re-activated.
    pub fn on_activate<W: MainWindow>(&mut self, window: &mut W) {
        if !window.is_visible() {
            window.show();
        }
    }

    /// User or OS asked to close the window.
    #[instrument(skip_all, fields(force_quit = self.force_quit))]
    pub fn on_close_requested<W: MainWindow>(&mut self, window: &mut W) -> CloseOutcome {
        self.flush_geometry(window);

        if self.force_quit {
            window.release();
            info!("Main window released for shutdown");
            CloseOutcome::Terminate
        } else {
            window.hide();
            debug!("Close suppressed, window hidden");
            CloseOutcome::Hidden
        }
    }

    /// One-time switch from login size to the persisted, resizable size.
    ///
    /// Returns `false` if the transition already happened.
    #[instrument(skip_all)]
    pub fn on_logined<W: MainWindow>(&mut self, window: &mut W) -> bool {
        if self.phase == WindowPhase::Resized {
            debug!("Repeated login signal ignored");
            return false;
        }

        window.set_resizable(true);
        window.set_geometry(self.geometry);
        self.phase = WindowPhase::Resized;

        info!(
            width = self.geometry.width,
            height = self.geometry.height,
            "Window switched to persisted size"
        );

        true
    }

    /// Window moved or resized. Only tracked after login.
    pub fn on_geometry_changed(&mut self, geometry: WindowGeometry) {
        if self.phase == WindowPhase::Resized && geometry != self.geometry {
            self.geometry = geometry;
            self.geometry_dirty = true;
        }
    }

    /// Persist pending geometry changes.
    pub fn flush_geometry<W: MainWindow>(&mut self, window: &mut W) {
        if !self.geometry_dirty {
            return;
        }

        match window.persist_geometry(&self.geometry) {
            Ok(()) => self.geometry_dirty = false,
            Err(e) => error!(error = ?e, "Failed to persist window geometry"),
        }
    }
}
