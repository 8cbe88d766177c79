mod click_detector;
mod tray_backend;
mod tray_controller;
mod tray_glyph;
mod tray_menu;

pub use {
    click_detector::{ClickDetector, ClickOutcome, DOUBLE_CLICK_WINDOW},
    tray_backend::TrayBackend,
    tray_controller::TrayController,
    tray_glyph::TrayGlyph,
    tray_menu::{TrayMenuItem, TrayMenuModel},
};
