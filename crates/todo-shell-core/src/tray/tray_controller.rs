//! Singleton tray icon reflecting unread-message state.
//!
//! Creation is two-phase: a render request parks the icon in
//! `PendingCreate` and schedules a tick, and the tick materializes the
//! handle only if none is live. A destroy and a create requested in the
//! same turn therefore never overlap.

use crate::{ClickDetector, ClickOutcome, ShellResult, TrayBackend, TrayGlyph, TrayMenuModel};

use std::time::Instant;

use tracing::{debug, info, instrument};

enum TraySlot<H> {
    Empty,
    PendingCreate {
        glyph: TrayGlyph,
        menu: TrayMenuModel,
    },
    Live(H),
}

/// Owns the tray handle and the last rendered unread count.
pub struct TrayController<H> {
    slot: TraySlot<H>,
    last_unread: u32,
    clicks: ClickDetector,
}

impl<H> TrayController<H> {
    /// Controller with no tray icon.
    pub fn new() -> Self {
        Self {
            slot: TraySlot::Empty,
            last_unread: 0,
            clicks: ClickDetector::new(),
        }
    }

    /// Unread count of the most recent update.
    pub fn last_unread(&self) -> u32 {
        self.last_unread
    }

    /// Whether a native tray handle currently exists.
    pub fn is_live(&self) -> bool {
        matches!(self.slot, TraySlot::Live(_))
    }

    /// Whether creation is waiting for the next tick.
    pub fn is_pending(&self) -> bool {
        matches!(self.slot, TraySlot::PendingCreate { .. })
    }

    /// Reconcile the tray with the desired visibility and unread count.
    ///
    /// Repeating a call with an unchanged count while the icon is live does
    /// not touch the backend.
    #[instrument(skip(self, backend))]
    pub fn update<B>(&mut self, backend: &mut B, visible: bool, unread: u32) -> ShellResult<()>
    where
        B: TrayBackend<Handle = H>,
    {
        if !visible {
            match std::mem::replace(&mut self.slot, TraySlot::Empty) {
                TraySlot::Live(handle) => {
                    backend.destroy_tray(handle);
                    info!("Tray icon removed");
                }
                TraySlot::PendingCreate { .. } => debug!("Pending tray creation cancelled"),
                TraySlot::Empty => {}
            }

            self.last_unread = unread;
            return Ok(());
        }

        if self.is_live() && unread == self.last_unread {
            return Ok(());
        }

        let glyph = TrayGlyph::for_unread(unread);
        let menu = TrayMenuModel::new(unread);

        // Recorded before rendering so a failed native update is not retried.
        self.last_unread = unread;

        match &mut self.slot {
            TraySlot::Live(handle) => {
                backend.set_tray_icon(handle, glyph)?;
                backend.set_tray_menu(handle, &menu)?;
                debug!(?glyph, unread, "Tray icon updated");
            }
            TraySlot::PendingCreate {
                glyph: pending_glyph,
                menu: pending_menu,
            } => {
                *pending_glyph = glyph;
                *pending_menu = menu;
            }
            TraySlot::Empty => {
                self.slot = TraySlot::PendingCreate { glyph, menu };
                backend.schedule_tray_tick();
            }
        }

        Ok(())
    }

    /// Second phase of creation, run on the tick scheduled by [`update`](Self::update).
    #[instrument(skip_all)]
    pub fn complete_pending<B>(&mut self, backend: &mut B) -> ShellResult<()>
    where
        B: TrayBackend<Handle = H>,
    {
        match std::mem::replace(&mut self.slot, TraySlot::Empty) {
            TraySlot::PendingCreate { glyph, menu } => {
                let handle = backend.create_tray(glyph, &menu)?;
                self.slot = TraySlot::Live(handle);
                info!(?glyph, "Tray icon created");
            }
            other => self.slot = other,
        }

        Ok(())
    }

    /// Feed a left click into the double-click detector.
    pub fn register_click(&mut self, now: Instant) -> ClickOutcome {
        self.clicks.register(now)
    }
}

impl<H> Default for TrayController<H> {
    fn default() -> Self {
        Self::new()
    }
}
