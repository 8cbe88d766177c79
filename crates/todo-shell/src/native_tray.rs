//! System tray backed by `tray-icon`.

use crate::{NativeHost, ShellEvent};

use todo_shell_core::{ShellError, ShellResult, TrayBackend, TrayGlyph, TrayMenuItem, TrayMenuModel};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, error, instrument};
use tray_icon::{
    Icon, TrayIcon, TrayIconBuilder,
    menu::{Menu, MenuItem, PredefinedMenuItem},
};

impl TrayBackend for NativeHost {
    type Handle = TrayIcon;

    #[track_caller]
    #[instrument(skip(self, menu), fields(unread = menu.unread()))]
    fn create_tray(&mut self, glyph: TrayGlyph, menu: &TrayMenuModel) -> ShellResult<TrayIcon> {
        let tray = TrayIconBuilder::new()
            .with_tooltip(&self.app_name)
            .with_icon(load_tray_icon(glyph)?)
            .with_menu(Box::new(build_tray_menu(menu)?))
            .with_menu_on_left_click(false)
            .build()
            .map_err(|e| tray_error(format!("Failed to create tray icon: {}", e)))?;

        debug!("Tray icon created");
        Ok(tray)
    }

    #[track_caller]
    fn set_tray_icon(&mut self, handle: &mut TrayIcon, glyph: TrayGlyph) -> ShellResult<()> {
        handle
            .set_icon(Some(load_tray_icon(glyph)?))
            .map_err(|e| tray_error(format!("Failed to update tray icon: {}", e)))
    }

    fn set_tray_menu(&mut self, handle: &mut TrayIcon, menu: &TrayMenuModel) -> ShellResult<()> {
        handle.set_menu(Some(Box::new(build_tray_menu(menu)?)));
        Ok(())
    }

    fn destroy_tray(&mut self, handle: TrayIcon) {
        drop(handle);
        debug!("Tray icon destroyed");
    }

    fn schedule_tray_tick(&mut self) {
        if self.proxy.send_event(ShellEvent::TrayTick).is_err() {
            error!("Event loop closed, tray tick dropped");
        }
    }
}

/// Context menu for `model`; item ids are the menu ids of their actions.
#[track_caller]
pub(crate) fn build_tray_menu(model: &TrayMenuModel) -> ShellResult<Menu> {
    let menu = Menu::new();

    for item in model.items() {
        let appended = match item {
            TrayMenuItem::Header(text) => menu.append(&MenuItem::new(text, false, None)),
            TrayMenuItem::Separator => menu.append(&PredefinedMenuItem::separator()),
            TrayMenuItem::Action { label, action } => {
                menu.append(&MenuItem::with_id(action.menu_id(), label, true, None))
            }
        };

        appended.map_err(|e| tray_error(format!("Failed to build tray menu: {}", e)))?;
    }

    Ok(menu)
}

/// Load a tray glyph from compile-time embedded PNG bytes.
#[track_caller]
pub(crate) fn load_tray_icon(glyph: TrayGlyph) -> ShellResult<Icon> {
    let png_bytes: &[u8] = match glyph {
        TrayGlyph::Normal => include_bytes!("../resources/icons/tray.png"),
        TrayGlyph::Unread => include_bytes!("../resources/icons/tray-unread.png"),
    };

    let img = image::load_from_memory(png_bytes).map_err(|e| ShellError::Image {
        reason: format!("Failed to decode embedded tray icon: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let rgba = img.into_rgba8();
    let (width, height) = (rgba.width(), rgba.height());

    Icon::from_rgba(rgba.into_raw(), width, height)
        .map_err(|e| tray_error(format!("Failed to create icon from RGBA: {}", e)))
}

#[track_caller]
fn tray_error(reason: String) -> ShellError {
    ShellError::Tray {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}
